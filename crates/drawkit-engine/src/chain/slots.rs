use super::Stage;

/// Owning slots for the resources beneath a canvas.
///
/// Invariants:
/// - a render target is only installed while a context is live
/// - a surface is only installed while a render target is live
/// - each slot holds at most one resource
///
/// Slots are filled and drained only by the manager that owns the chain; callers
/// outside the crate get shared references.
#[derive(Debug)]
pub struct Chain<C, T, S> {
    context: Option<C>,
    render_target: Option<T>,
    surface: Option<S>,
}

impl<C, T, S> Default for Chain<C, T, S> {
    fn default() -> Self {
        Self {
            context: None,
            render_target: None,
            surface: None,
        }
    }
}

impl<C, T, S> Chain<C, T, S> {
    #[inline]
    pub fn context(&self) -> Option<&C> {
        self.context.as_ref()
    }

    #[inline]
    pub fn render_target(&self) -> Option<&T> {
        self.render_target.as_ref()
    }

    #[inline]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.context.is_none() && self.render_target.is_none() && self.surface.is_none()
    }

    /// Mutable view of all three slots at once.
    pub(crate) fn parts_mut(&mut self) -> (Option<&mut C>, Option<&mut T>, Option<&mut S>) {
        (
            self.context.as_mut(),
            self.render_target.as_mut(),
            self.surface.as_mut(),
        )
    }

    pub(crate) fn install_context(&mut self, context: C) {
        debug_assert!(self.context.is_none(), "context slot already occupied");
        self.context = Some(context);
    }

    pub(crate) fn install_render_target(&mut self, target: T) {
        debug_assert!(self.context.is_some(), "render target installed without a context");
        debug_assert!(self.render_target.is_none(), "render target slot already occupied");
        self.render_target = Some(target);
    }

    pub(crate) fn install_surface(&mut self, surface: S) {
        debug_assert!(self.render_target.is_some(), "surface installed without a render target");
        debug_assert!(self.surface.is_none(), "surface slot already occupied");
        self.surface = Some(surface);
    }

    pub(crate) fn take_surface(&mut self) -> Option<S> {
        self.surface.take()
    }

    pub(crate) fn take_render_target(&mut self) -> Option<T> {
        debug_assert!(self.surface.is_none(), "render target released before its surface");
        self.render_target.take()
    }

    pub(crate) fn take_context(&mut self) -> Option<C> {
        debug_assert!(self.render_target.is_none(), "context released before its render target");
        self.context.take()
    }

    /// Liveness snapshot, with the canvas state supplied by the owner of the canvas slot.
    pub fn state(&self, canvas_live: bool) -> ChainState {
        ChainState {
            live: [
                self.context.is_some(),
                self.render_target.is_some(),
                self.surface.is_some(),
                canvas_live,
            ],
        }
    }
}

/// Which stages of a chain are currently live.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ChainState {
    live: [bool; 4],
}

impl ChainState {
    /// State of a manager without any chain beneath its canvas.
    pub fn canvas_only(canvas_live: bool) -> Self {
        Self {
            live: [false, false, false, canvas_live],
        }
    }

    #[inline]
    pub fn is_live(&self, stage: Stage) -> bool {
        self.live[stage.index()]
    }

    pub fn is_empty(&self) -> bool {
        !self.live.iter().any(|l| *l)
    }

    /// Last live stage in creation order.
    pub fn deepest(&self) -> Option<Stage> {
        Stage::CREATION_ORDER
            .into_iter()
            .rev()
            .find(|s| self.is_live(*s))
    }

    /// Every live stage has a live predecessor.
    ///
    /// Canvas-only states are accepted: a direct canvas has no chain beneath it.
    pub fn is_consistent(&self) -> bool {
        if *self == Self::canvas_only(true) {
            return true;
        }
        Stage::CREATION_ORDER.into_iter().all(|stage| {
            !self.is_live(stage) || stage.predecessor().is_none_or(|p| self.is_live(p))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestChain = Chain<u8, u16, u32>;

    #[test]
    fn empty_chain_is_consistent() {
        let chain = TestChain::default();
        assert!(chain.is_empty());
        let state = chain.state(false);
        assert!(state.is_empty());
        assert!(state.is_consistent());
        assert_eq!(state.deepest(), None);
    }

    #[test]
    fn install_and_drain_in_order() {
        let mut chain = TestChain::default();
        chain.install_context(1);
        chain.install_render_target(2);
        chain.install_surface(3);

        let state = chain.state(true);
        assert!(state.is_consistent());
        assert_eq!(state.deepest(), Some(Stage::Canvas));

        assert_eq!(chain.take_surface(), Some(3));
        assert_eq!(chain.take_render_target(), Some(2));
        assert_eq!(chain.take_context(), Some(1));
        assert!(chain.is_empty());
    }

    #[test]
    fn partial_chain_reports_deepest_stage() {
        let mut chain = TestChain::default();
        chain.install_context(1);
        let state = chain.state(false);
        assert_eq!(state.deepest(), Some(Stage::Context));
        assert!(state.is_consistent());
    }

    #[test]
    fn orphaned_surface_is_inconsistent() {
        let state = ChainState {
            live: [true, false, true, false],
        };
        assert!(!state.is_consistent());
    }

    #[test]
    fn canvas_only_is_consistent() {
        assert!(ChainState::canvas_only(true).is_consistent());
        assert!(ChainState::canvas_only(false).is_empty());
    }

    #[test]
    fn take_on_empty_slots_is_none() {
        let mut chain = TestChain::default();
        assert_eq!(chain.take_surface(), None);
        assert_eq!(chain.take_render_target(), None);
        assert_eq!(chain.take_context(), None);
    }
}
