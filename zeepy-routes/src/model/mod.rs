pub mod animation;
pub mod card;
pub mod claim;
pub mod dataset;
