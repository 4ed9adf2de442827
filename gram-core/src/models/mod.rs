pub mod prg;
pub mod region;

// re-export for cleaner imports
pub use self::prg::Prg;
pub use self::region::Region;
