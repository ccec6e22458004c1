mod capture;

pub use capture::InputCapture;
