//! Default parameters and limits for palette extraction
//!
//! Compile-time constants for clustering, pixel sampling, and the
//! resize presets. Runtime overrides live in [`crate::config`].

/// Clustering defaults
pub mod clustering {
    /// Default number of palette entries when the caller does not specify one
    pub const DEFAULT_PALETTE_SIZE: usize = 5;

    /// Maximum Lloyd's iterations before clustering stops regardless of
    /// convergence. Bounded iterations guarantee termination.
    pub const MAX_ITERATIONS: usize = 20;

    /// Convergence threshold on squared centroid movement, in 0-255
    /// channel units
    pub const CONVERGENCE_EPSILON: f32 = 1e-4;

    /// Default random seed for centroid initialization. A fixed seed makes
    /// repeated runs on the same image produce identical palettes.
    pub const DEFAULT_SEED: u64 = 0;
}

/// Pixel layout limits
pub mod channels {
    /// Channel count of an RGB pixel
    pub const RGB: usize = 3;

    /// Channel count of an RGBA pixel
    pub const RGBA: usize = 4;

    /// Maximum channel value before promotion to floating point
    pub const CHANNEL_MAX: f32 = 255.0;
}

/// Resize presets matching the original service's image variants
pub mod resize {
    /// Icon target dimensions
    pub const ICON_SIZE: (u32, u32) = (192, 192);

    /// Wallpaper target dimensions
    pub const WALLPAPER_SIZE: (u32, u32) = (1920, 1080);

    /// JPEG/WebP encoding quality (0-100)
    pub const DEFAULT_QUALITY: u8 = 100;
}
