//! Built-in composite filters

mod longshadow_pd;

pub use longshadow_pd::{LongShadowPd, LongShadowPdNodes, LONG_SHADOW_PD_KEYS};
