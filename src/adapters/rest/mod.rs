pub mod kyobo;

#[allow(unused_imports)]
pub use kyobo::KyoboRestProvider;
