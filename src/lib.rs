pub use rotation3d_math as math;
