//! 单向链表容器：线性链表、环形链表，以及可作栈或队列使用的两用链表。

pub mod circular;
pub mod config;
pub mod dual_mode;
pub mod error;
pub mod linear;
pub mod render;

pub use circular::CircularChain;
pub use config::DemoConfig;
pub use dual_mode::{DualModeChain, Mode};
pub use error::ChainError;
pub use linear::LinearChain;
