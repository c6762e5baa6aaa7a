pub mod weth;
