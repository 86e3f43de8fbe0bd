//! Scoped lifetime of the transient surface a rasterizer paints from.
//!
//! A surface is attached to a [`SurfaceHost`] for exactly the duration of one
//! [`with_render_surface`] call. Detachment is tied to a drop guard, so it
//! happens on normal return, on an `Err` result and while unwinding from a
//! panic, always before control leaves `with_render_surface`.

use folio_layout::SurfaceDescriptor;
use folio_types::{Point, Size};
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Horizontal distance kept between an attached surface and the visible area.
const OFFSCREEN_MARGIN: f32 = 10_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SurfaceId(u64);

/// The parent of transient render surfaces.
///
/// One host can be shared by any number of concurrent exports; every call to
/// [`with_render_surface`] gets its own surface and id.
#[derive(Debug, Default)]
pub struct SurfaceHost {
    next_id: AtomicU64,
    attached: Mutex<BTreeMap<SurfaceId, Size>>,
}

impl SurfaceHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attached_count(&self) -> usize {
        self.lock().len()
    }

    pub fn is_attached(&self, id: SurfaceId) -> bool {
        self.lock().contains_key(&id)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<SurfaceId, Size>> {
        // The map stays consistent even if a holder panicked; keep going.
        self.attached.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn attach(&self, size: Size) -> SurfaceId {
        let id = SurfaceId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock().insert(id, size);
        log::debug!("Attached render surface {:?} ({}x{})", id, size.width, size.height);
        id
    }

    fn detach(&self, id: SurfaceId) {
        if self.lock().remove(&id).is_some() {
            log::debug!("Released render surface {:?}", id);
        }
    }
}

/// A populated, off-viewport surface. Only lent out by reference for the
/// duration of a [`with_render_surface`] call.
#[derive(Debug)]
pub struct RenderSurface<'a> {
    id: SurfaceId,
    origin: Point,
    descriptor: &'a SurfaceDescriptor,
}

impl RenderSurface<'_> {
    pub fn id(&self) -> SurfaceId {
        self.id
    }

    /// Top-left corner in host coordinates, outside any visible viewport.
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn size(&self) -> Size {
        self.descriptor.size()
    }

    /// The composed content the surface was populated with.
    pub fn content(&self) -> &SurfaceDescriptor {
        self.descriptor
    }
}

struct Lease<'h> {
    host: &'h SurfaceHost,
    id: SurfaceId,
}

impl Drop for Lease<'_> {
    fn drop(&mut self) {
        self.host.detach(self.id);
    }
}

/// Attaches a surface for `descriptor` to `host`, runs `f` against it and
/// detaches it again before returning, whatever `f` does.
pub fn with_render_surface<T>(
    host: &SurfaceHost,
    descriptor: &SurfaceDescriptor,
    f: impl FnOnce(&RenderSurface<'_>) -> T,
) -> T {
    let size = descriptor.size();
    let id = host.attach(size);
    let _lease = Lease { host, id };

    let surface = RenderSurface {
        id,
        origin: Point::new(-(size.width + OFFSCREEN_MARGIN), 0.0),
        descriptor,
    };
    f(&surface)
}
