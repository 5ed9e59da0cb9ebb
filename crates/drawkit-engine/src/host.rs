//! Host and backend identification for diagnostics.

use std::fmt;

/// Graphics API a manager draws through.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GraphicsApi {
    Software,
    Vulkan,
    Metal,
    Direct3D12,
    OpenGl,
    WebGpu,
    Unknown,
}

impl GraphicsApi {
    pub fn from_wgpu(backend: wgpu::Backend) -> Self {
        match backend {
            wgpu::Backend::Vulkan => GraphicsApi::Vulkan,
            wgpu::Backend::Metal => GraphicsApi::Metal,
            wgpu::Backend::Dx12 => GraphicsApi::Direct3D12,
            wgpu::Backend::Gl => GraphicsApi::OpenGl,
            wgpu::Backend::BrowserWebGpu => GraphicsApi::WebGpu,
            _ => GraphicsApi::Unknown,
        }
    }
}

impl fmt::Display for GraphicsApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GraphicsApi::Software => "SOFTWARE",
            GraphicsApi::Vulkan => "VULKAN",
            GraphicsApi::Metal => "METAL",
            GraphicsApi::Direct3D12 => "DIRECT3D",
            GraphicsApi::OpenGl => "OPENGL",
            GraphicsApi::WebGpu => "WEBGPU",
            GraphicsApi::Unknown => "UNKNOWN",
        })
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HostOs {
    Linux,
    Windows,
    MacOs,
    Ios,
    Android,
    Wasm,
    Unknown,
}

impl HostOs {
    pub const fn current() -> Self {
        if cfg!(target_os = "linux") {
            HostOs::Linux
        } else if cfg!(target_os = "windows") {
            HostOs::Windows
        } else if cfg!(target_os = "macos") {
            HostOs::MacOs
        } else if cfg!(target_os = "ios") {
            HostOs::Ios
        } else if cfg!(target_os = "android") {
            HostOs::Android
        } else if cfg!(target_arch = "wasm32") {
            HostOs::Wasm
        } else {
            HostOs::Unknown
        }
    }

    pub const fn id(self) -> &'static str {
        match self {
            HostOs::Linux => "linux",
            HostOs::Windows => "windows",
            HostOs::MacOs => "macos",
            HostOs::Ios => "ios",
            HostOs::Android => "android",
            HostOs::Wasm => "wasm",
            HostOs::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HostArch {
    X64,
    Arm64,
    Wasm,
    Unknown,
}

impl HostArch {
    pub const fn current() -> Self {
        if cfg!(target_arch = "x86_64") {
            HostArch::X64
        } else if cfg!(target_arch = "aarch64") {
            HostArch::Arm64
        } else if cfg!(target_arch = "wasm32") {
            HostArch::Wasm
        } else {
            HostArch::Unknown
        }
    }

    pub const fn id(self) -> &'static str {
        match self {
            HostArch::X64 => "x64",
            HostArch::Arm64 => "arm64",
            HostArch::Wasm => "wasm",
            HostArch::Unknown => "unknown",
        }
    }
}

/// Formats the diagnostic block returned by `DrawManager::renderer_info`.
pub fn renderer_info(api: GraphicsApi) -> String {
    format!(
        "GraphicsApi: {api}\nOS: {} {}\n",
        HostOs::current().id(),
        HostArch::current().id()
    )
}

/// Whether a drawable may composite with what is behind it.
///
/// macOS always supports a transparent layer. Elsewhere a fullscreen layer is
/// never transparent, and a windowed layer follows its own `transparency` flag.
pub fn is_transparent_background(os: HostOs, fullscreen: bool, transparency: bool) -> bool {
    if os == HostOs::MacOs {
        return true;
    }
    if fullscreen {
        return false;
    }
    transparency
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_names_api_and_host() {
        let info = renderer_info(GraphicsApi::Software);
        assert!(info.starts_with("GraphicsApi: SOFTWARE\nOS: "));
        assert!(info.contains(HostOs::current().id()));
        assert!(info.ends_with(&format!("{}\n", HostArch::current().id())));
    }

    #[test]
    fn macos_is_always_transparent() {
        assert!(is_transparent_background(HostOs::MacOs, true, false));
    }

    #[test]
    fn fullscreen_disables_transparency_elsewhere() {
        assert!(!is_transparent_background(HostOs::Windows, true, true));
        assert!(is_transparent_background(HostOs::Linux, false, true));
        assert!(!is_transparent_background(HostOs::Linux, false, false));
    }

    #[test]
    fn wgpu_backends_map_to_apis() {
        assert_eq!(GraphicsApi::from_wgpu(wgpu::Backend::Metal), GraphicsApi::Metal);
        assert_eq!(GraphicsApi::from_wgpu(wgpu::Backend::Gl), GraphicsApi::OpenGl);
    }
}
