//! Fatal start-up errors
//!
//! The simulation itself never fails; everything here stops the app before
//! or while opening the window and GPU surface.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum AppError {
    /// Could not create the OS event loop
    EventLoop(winit::error::EventLoopError),
    /// Could not open the window
    Window(winit::error::OsError),
    /// Failed to create a surface for rendering
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found
    NoAdapter(wgpu::RequestAdapterError),
    /// Failed to create GPU device
    DeviceCreation(wgpu::RequestDeviceError),
    /// Surface reported no usable texture format
    NoSurfaceFormat,
    /// Settings file could not be read
    SettingsIo(PathBuf, std::io::Error),
    /// Settings file is not valid JSON for `Settings`
    SettingsParse(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            AppError::Window(e) => write!(f, "Failed to open window: {}", e),
            AppError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            AppError::NoAdapter(e) => write!(
                f,
                "No compatible GPU adapter found ({}). Ensure your system has Vulkan/Metal/DX12/GL support.",
                e
            ),
            AppError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
            AppError::NoSurfaceFormat => write!(f, "GPU surface offers no texture formats"),
            AppError::SettingsIo(path, e) => {
                write!(f, "Failed to read settings {}: {}", path.display(), e)
            }
            AppError::SettingsParse(e) => write!(f, "Invalid settings file: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::EventLoop(e) => Some(e),
            AppError::Window(e) => Some(e),
            AppError::SurfaceCreation(e) => Some(e),
            AppError::NoAdapter(e) => Some(e),
            AppError::DeviceCreation(e) => Some(e),
            AppError::SettingsIo(_, e) => Some(e),
            AppError::SettingsParse(e) => Some(e),
            AppError::NoSurfaceFormat => None,
        }
    }
}

impl From<winit::error::EventLoopError> for AppError {
    fn from(e: winit::error::EventLoopError) -> Self {
        AppError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for AppError {
    fn from(e: winit::error::OsError) -> Self {
        AppError::Window(e)
    }
}

impl From<wgpu::CreateSurfaceError> for AppError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        AppError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestAdapterError> for AppError {
    fn from(e: wgpu::RequestAdapterError) -> Self {
        AppError::NoAdapter(e)
    }
}

impl From<wgpu::RequestDeviceError> for AppError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        AppError::DeviceCreation(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::SettingsParse(e)
    }
}
