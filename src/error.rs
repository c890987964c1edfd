//! Error types for driftfield.
//!
//! Configuration and projection errors come from the interaction model
//! itself; GPU and run errors only arise in the windowed harness.

use std::fmt;

/// Errors from validating a [`FieldConfig`](crate::FieldConfig) or camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The particle count is zero.
    ZeroParticleCount,
    /// The seeding disk diameter is not a positive finite number.
    InvalidDiameter(f32),
    /// The proximity threshold is negative or not finite.
    InvalidThreshold(f32),
    /// The camera aspect ratio is not a positive finite number.
    InvalidAspect(f32),
    /// The camera clip planes do not satisfy `0 < near < far`.
    InvalidClipPlanes { near: f32, far: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroParticleCount => write!(f, "Particle count must be at least 1"),
            ConfigError::InvalidDiameter(d) => {
                write!(f, "Seeding disk diameter must be positive, got {}", d)
            }
            ConfigError::InvalidThreshold(t) => {
                write!(f, "Proximity threshold must be non-negative, got {}", t)
            }
            ConfigError::InvalidAspect(a) => {
                write!(f, "Camera aspect ratio must be positive, got {}", a)
            }
            ConfigError::InvalidClipPlanes { near, far } => {
                write!(f, "Camera clip planes must satisfy 0 < near < far, got near={} far={}", near, far)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors from projecting the pointer onto the particle plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectionError {
    /// The pointer ray is parallel to the particle plane, so the
    /// plane intersection is undefined.
    DegenerateRay { ray_z: f32 },
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionError::DegenerateRay { ray_z } => write!(
                f,
                "Pointer ray is parallel to the particle plane (direction z = {})",
                ray_z
            ),
        }
    }
}

impl std::error::Error for ProjectionError {}

/// Errors that can occur during GPU initialization.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter,
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::NoAdapter => write!(f, "No compatible GPU adapter found. Ensure your system has a GPU with WebGPU/Vulkan/Metal/DX12 support."),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
            GpuError::NoAdapter => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Errors that can occur when running the windowed demo.
#[derive(Debug)]
pub enum RunError {
    /// Failed to create event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
    /// The field configuration is invalid.
    Config(ConfigError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            RunError::Window(e) => write!(f, "Failed to create window: {}", e),
            RunError::Gpu(e) => write!(f, "GPU error: {}", e),
            RunError::Config(e) => write!(f, "Invalid configuration: {}", e),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunError::EventLoop(e) => Some(e),
            RunError::Window(e) => Some(e),
            RunError::Gpu(e) => Some(e),
            RunError::Config(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for RunError {
    fn from(e: winit::error::EventLoopError) -> Self {
        RunError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for RunError {
    fn from(e: winit::error::OsError) -> Self {
        RunError::Window(e)
    }
}

impl From<GpuError> for RunError {
    fn from(e: GpuError) -> Self {
        RunError::Gpu(e)
    }
}

impl From<ConfigError> for RunError {
    fn from(e: ConfigError) -> Self {
        RunError::Config(e)
    }
}
