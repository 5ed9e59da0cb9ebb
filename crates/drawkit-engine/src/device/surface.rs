use crate::chain::Size;

use super::SurfaceErrorAction;

/// Whether both dimensions fit within the device's 2D texture limit.
pub(crate) fn fits_texture_limit(size: Size, max_dimension_2d: u32) -> bool {
    size.width <= max_dimension_2d && size.height <= max_dimension_2d
}

pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if prefer_srgb {
        let preferred = [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        if let Some(f) = preferred.into_iter().find(|f| formats.contains(f)) {
            return Some(f);
        }
    }

    formats.first().copied()
}

/// Picks an alpha mode: an explicit request wins when supported, then the mode
/// matching the layer's transparency, then whatever the surface lists first.
pub(crate) fn choose_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
    transparent: bool,
) -> wgpu::CompositeAlphaMode {
    use wgpu::CompositeAlphaMode as M;

    let by_transparency: &[M] = if transparent {
        &[M::PreMultiplied, M::PostMultiplied, M::Inherit]
    } else {
        &[M::Opaque]
    };

    requested
        .filter(|m| supported.contains(m))
        .or_else(|| by_transparency.iter().copied().find(|m| supported.contains(m)))
        .or_else(|| supported.first().copied())
        .unwrap_or(M::Auto)
}

pub(crate) fn map_surface_error(err: &wgpu::SurfaceError) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceErrorAction::Reconfigure,
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout => SurfaceErrorAction::SkipFrame,
        wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::CompositeAlphaMode as M;
    use wgpu::TextureFormat as F;

    #[test]
    fn texture_limit_is_inclusive_per_dimension() {
        assert!(fits_texture_limit(Size::new(8192, 8192), 8192));
        assert!(!fits_texture_limit(Size::new(8193, 600), 8192));
        assert!(!fits_texture_limit(Size::new(800, 16384), 8192));
    }

    #[test]
    fn srgb_preferred_when_listed() {
        let formats = [F::Bgra8Unorm, F::Rgba8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, true), Some(F::Rgba8UnormSrgb));
        assert_eq!(choose_surface_format(&formats, false), Some(F::Bgra8Unorm));
    }

    #[test]
    fn no_formats_means_no_choice() {
        assert_eq!(choose_surface_format(&[], true), None);
    }

    #[test]
    fn supported_request_wins() {
        let supported = [M::Opaque, M::PreMultiplied];
        assert_eq!(choose_alpha_mode(&supported, Some(M::Opaque), true), M::Opaque);
    }

    #[test]
    fn transparency_picks_blending_mode() {
        let supported = [M::Opaque, M::PostMultiplied];
        assert_eq!(choose_alpha_mode(&supported, None, true), M::PostMultiplied);
        assert_eq!(choose_alpha_mode(&supported, None, false), M::Opaque);
    }

    #[test]
    fn unsupported_request_falls_back() {
        let supported = [M::Inherit];
        assert_eq!(choose_alpha_mode(&supported, Some(M::Opaque), false), M::Inherit);
        assert_eq!(choose_alpha_mode(&[], None, false), M::Auto);
    }

    #[test]
    fn surface_errors_map_to_actions() {
        assert_eq!(
            map_surface_error(&wgpu::SurfaceError::Outdated),
            SurfaceErrorAction::Reconfigure
        );
        assert_eq!(
            map_surface_error(&wgpu::SurfaceError::OutOfMemory),
            SurfaceErrorAction::Fatal
        );
        assert_eq!(
            map_surface_error(&wgpu::SurfaceError::Timeout),
            SurfaceErrorAction::SkipFrame
        );
    }
}
