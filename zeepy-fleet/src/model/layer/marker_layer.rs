use std::collections::BTreeSet;

/// the shared layer markers are added to or removed from to toggle visibility.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerLayer {
    members: BTreeSet<usize>,
}

impl MarkerLayer {
    pub fn new() -> MarkerLayer {
        MarkerLayer::default()
    }

    pub fn has_layer(&self, vehicle_id: usize) -> bool {
        self.members.contains(&vehicle_id)
    }

    pub fn add_layer(&mut self, vehicle_id: usize) {
        self.members.insert(vehicle_id);
    }

    pub fn remove_layer(&mut self, vehicle_id: usize) {
        self.members.remove(&vehicle_id);
    }

    pub fn visible(&self) -> impl Iterator<Item = usize> + '_ {
        self.members.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
