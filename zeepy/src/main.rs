use clap::Parser;
use zeepy::app::{ZeepyApp, ZeepyAppError};

fn main() -> Result<(), ZeepyAppError> {
    env_logger::init();
    log::debug!("cwd: {:?}", std::env::current_dir());
    let args = ZeepyApp::parse();
    args.op.run()
}
