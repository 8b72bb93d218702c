pub mod dns;
pub mod zones;

pub use dns::{Resolution, ResolveQuestionUseCase};
pub use zones::ReloadZonesUseCase;
