pub mod de;
pub mod goal;
pub mod progress;
