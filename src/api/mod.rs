mod config;
mod plot;

pub use config::PlotConfig;
pub use plot::{DataGroupId, Plot};
