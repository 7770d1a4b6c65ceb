pub mod signal_helpers;

pub use mock_signaling::MockSignalingOutput;
