pub mod dump;
pub mod generate;
pub mod model_loader;
