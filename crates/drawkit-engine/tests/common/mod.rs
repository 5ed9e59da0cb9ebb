//! Recording test double for the GPU chain.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use drawkit_engine::chain::{RenderFailure, RenderResult, Size, Stage};
use drawkit_engine::host::GraphicsApi;
use drawkit_engine::manager::{Canvas, FlushCtx, GpuBackend, GpuDrawManager};
use drawkit_engine::paint::Color;
use drawkit_engine::registry::{self, ContextId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    InitContext(ContextId),
    ContextInitHook(ContextId),
    InitRenderTarget(Size),
    InitSurface(Size),
    InitCanvas(Size),
    Clear(u32),
    Flush,
    ReleaseCanvas,
    ReleaseSurface,
    ReleaseRenderTarget,
    ContextDisposeHook(ContextId),
    ReleaseContext(ContextId),
}

/// Shared between a test and the backend it hands to a manager.
#[derive(Default)]
pub struct Script {
    events: RefCell<Vec<Event>>,
    fail_at: Cell<Option<Stage>>,
    refuse_reuse: Cell<bool>,
}

impl Script {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn fail_at(&self, stage: Option<Stage>) {
        self.fail_at.set(stage);
    }

    pub fn refuse_context_reuse(&self, refuse: bool) {
        self.refuse_reuse.set(refuse);
    }

    pub fn push(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }

    /// Drains everything recorded so far.
    pub fn take(&self) -> Vec<Event> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    fn check(&self, stage: Stage) -> RenderResult<()> {
        if self.fail_at.get() == Some(stage) {
            return Err(RenderFailure::new(stage, "scripted failure"));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct FakeContext {
    pub id: ContextId,
}

#[derive(Debug)]
pub struct FakeRenderTarget {
    pub size: Size,
}

#[derive(Debug)]
pub struct FakeSurface {
    pub size: Size,
}

pub struct FakeCanvas {
    pub size: Size,
    pub last_clear: Option<Color>,
    script: Rc<Script>,
}

impl Canvas for FakeCanvas {
    fn clear(&mut self, color: Color) {
        self.last_clear = Some(color);
        self.script.push(Event::Clear(color.to_argb()));
    }
}

pub struct RecordingBackend {
    script: Rc<Script>,
}

impl RecordingBackend {
    pub fn new(script: &Rc<Script>) -> Self {
        Self {
            script: script.clone(),
        }
    }
}

impl GpuBackend for RecordingBackend {
    type Context = FakeContext;
    type RenderTarget = FakeRenderTarget;
    type Surface = FakeSurface;
    type Canvas = FakeCanvas;

    fn graphics_api(&self) -> GraphicsApi {
        GraphicsApi::Vulkan
    }

    fn adapter_info(&self, context: &FakeContext) -> Option<String> {
        Some(format!("fake adapter {}", context.id))
    }

    fn init_context(&mut self) -> RenderResult<FakeContext> {
        self.script.check(Stage::Context)?;
        let id = ContextId::next();
        self.script.push(Event::InitContext(id));
        Ok(FakeContext { id })
    }

    fn on_direct_context_init(&mut self, context: &mut FakeContext) {
        registry::register(context.id);
        self.script.push(Event::ContextInitHook(context.id));
    }

    fn on_direct_context_dispose(&mut self, context: &mut FakeContext) {
        registry::unregister(context.id);
        self.script.push(Event::ContextDisposeHook(context.id));
    }

    fn init_backend_render_target(
        &mut self,
        _context: &FakeContext,
        size: Size,
    ) -> RenderResult<FakeRenderTarget> {
        self.script.check(Stage::RenderTarget)?;
        self.script.push(Event::InitRenderTarget(size));
        Ok(FakeRenderTarget { size })
    }

    fn init_surface(
        &mut self,
        _context: &FakeContext,
        render_target: &FakeRenderTarget,
    ) -> RenderResult<FakeSurface> {
        self.script.check(Stage::Surface)?;
        self.script.push(Event::InitSurface(render_target.size));
        Ok(FakeSurface {
            size: render_target.size,
        })
    }

    fn init_canvas(&mut self, _context: &FakeContext, surface: &FakeSurface) -> RenderResult<FakeCanvas> {
        self.script.check(Stage::Canvas)?;
        self.script.push(Event::InitCanvas(surface.size));
        Ok(FakeCanvas {
            size: surface.size,
            last_clear: None,
            script: self.script.clone(),
        })
    }

    fn can_reuse_context(&self, _context: &FakeContext, _size: Size) -> bool {
        !self.script.refuse_reuse.get()
    }

    fn flush(&mut self, _frame: FlushCtx<'_, Self>) {
        self.script.push(Event::Flush);
    }

    fn release_canvas(&mut self, _canvas: FakeCanvas) {
        self.script.push(Event::ReleaseCanvas);
    }

    fn release_surface(&mut self, _surface: FakeSurface) {
        self.script.push(Event::ReleaseSurface);
    }

    fn release_render_target(&mut self, _render_target: FakeRenderTarget) {
        self.script.push(Event::ReleaseRenderTarget);
    }

    fn release_context(&mut self, context: FakeContext) {
        self.script.push(Event::ReleaseContext(context.id));
    }
}

/// Manager over a recording backend at 640x480, counting draw callbacks.
pub fn manager(script: &Rc<Script>) -> (GpuDrawManager<RecordingBackend>, Rc<Cell<u32>>) {
    let draws = Rc::new(Cell::new(0));
    let counter = draws.clone();
    let manager = GpuDrawManager::new(
        RecordingBackend::new(script),
        Size::new(640, 480),
        move |_canvas: &mut FakeCanvas| counter.set(counter.get() + 1),
    );
    (manager, draws)
}

/// Context id recorded by the first `InitContext` event.
pub fn created_context(events: &[Event]) -> Option<ContextId> {
    events.iter().find_map(|e| match e {
        Event::InitContext(id) => Some(*id),
        _ => None,
    })
}
