pub mod channel_interleave;
pub mod green_banding;
