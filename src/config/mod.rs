pub mod core;
pub mod gameplay;
pub mod rendering;
pub mod scene;

pub use self::core::ViewerConfig;
pub use gameplay::GameplayConfig;
pub use rendering::RenderConfig;
pub use scene::SceneConfig;
