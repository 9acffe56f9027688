use std::{path::PathBuf, sync::Arc, time::Duration};

use crate::{
    animation::stroke::{StrokeAnimation, duration_from_secs},
    component::props::Props,
    fetch::{
        fetcher::{AutoFetcher, SvgFetcher},
        task::{FetchOutcome, FetchQueue},
    },
    foundation::error::{HandscriptError, HandscriptResult},
    geometry::dimensions::{DimensionCache, Dimensions},
    path::resolve::{ActivePath, PathResolver},
    render::markup::{MarkupInput, render_html, render_svg_document},
};

/// What an [`HandwritingText::update`] call re-triggered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateEffects {
    /// A new external retrieval was started.
    pub refetch: bool,
    /// The draw animation was restarted or re-timed.
    pub animation_restarted: bool,
}

/// Handwriting-style animated text widget.
///
/// The host drives it: [`mount`](Self::mount) once, [`update`](Self::update) on prop changes,
/// [`poll`](Self::poll) to pick up finished retrievals, and [`render`](Self::render) on every
/// frame. Times are offsets on the host timeline.
#[derive(Debug)]
pub struct HandwritingText {
    props: Props,
    resolver: PathResolver,
    dimensions: DimensionCache,
    animation: StrokeAnimation,
    fetches: FetchQueue,
    mounted: bool,
}

impl HandwritingText {
    /// Validate `props` and build an unmounted widget.
    pub fn new(props: Props, fetcher: Arc<dyn SvgFetcher>) -> HandscriptResult<Self> {
        props.validate()?;
        let animation = StrokeAnimation::new(props.config.stroke_dash_array, props.config.ease)?;
        Ok(Self {
            resolver: PathResolver::new(props.path_spec()),
            dimensions: DimensionCache::new(),
            animation,
            fetches: FetchQueue::new(fetcher),
            mounted: false,
            props,
        })
    }

    /// Widget using [`AutoFetcher`] with files resolved relative to `root`.
    pub fn with_root(props: Props, root: impl Into<PathBuf>) -> HandscriptResult<Self> {
        Self::new(props, Arc::new(AutoFetcher::rooted(root)))
    }

    /// Current props.
    pub fn props(&self) -> &Props {
        &self.props
    }

    /// `true` between [`mount`](Self::mount) and teardown.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Active path after precedence resolution.
    pub fn active_path(&self) -> ActivePath<'_> {
        self.resolver.active()
    }

    /// Dimensions of the active path (memoized on the path string).
    pub fn dimensions(&mut self) -> Dimensions {
        let d = self.resolver.active().d;
        self.dimensions.get_or_measure(d)
    }

    /// Number of dimension measurements performed so far.
    pub fn measurements(&self) -> u64 {
        self.dimensions.computations()
    }

    /// Draw animation state.
    pub fn animation(&self) -> &StrokeAnimation {
        &self.animation
    }

    /// Retrievals started but not yet applied.
    pub fn pending_fetches(&self) -> usize {
        self.fetches.in_flight()
    }

    /// Arm the animation and start the external retrieval, if any.
    #[tracing::instrument(skip(self))]
    pub fn mount(&mut self, now: Duration) -> HandscriptResult<()> {
        if self.mounted {
            return Err(HandscriptError::validation("widget is already mounted"));
        }
        let duration = duration_from_secs(self.props.config.duration)?;
        self.mounted = true;
        self.animation.start(duration, now);
        if let Some(reference) = self.resolver.external() {
            self.fetches.request(reference);
        }
        Ok(())
    }

    /// Replace props and re-run only the stages whose inputs changed.
    ///
    /// Invalid props are rejected without touching the current state.
    #[tracing::instrument(skip(self, props))]
    pub fn update(&mut self, props: Props, now: Duration) -> HandscriptResult<UpdateEffects> {
        props.validate()?;
        let duration = duration_from_secs(props.config.duration)?;
        let mut effects = UpdateEffects::default();

        let old = &self.props.config;
        let rebuild = old.stroke_dash_array != props.config.stroke_dash_array
            || old.ease != props.config.ease;
        let retime = old.duration != props.config.duration;

        if rebuild {
            self.animation = StrokeAnimation::new(props.config.stroke_dash_array, props.config.ease)?;
        }
        if self.mounted && (rebuild || retime) {
            self.animation.start(duration, now);
            effects.animation_restarted = true;
        }

        if self.resolver.set_spec(props.path_spec())
            && self.mounted
            && let Some(reference) = self.resolver.external()
        {
            self.fetches.request(reference);
            effects.refetch = true;
        }

        self.props = props;
        Ok(effects)
    }

    /// Apply finished retrievals. Returns `true` if the active path changed.
    pub fn poll(&mut self) -> bool {
        let outcomes = self.fetches.drain();
        self.apply(outcomes)
    }

    /// Block up to `timeout` for the outstanding retrieval, then apply it.
    pub fn wait_for_fetch(&mut self, timeout: Duration) -> bool {
        let outcomes = self.fetches.wait(timeout);
        self.apply(outcomes)
    }

    fn apply(&mut self, outcomes: Vec<FetchOutcome>) -> bool {
        let mut changed = false;
        for outcome in outcomes {
            changed |= self
                .resolver
                .apply_fetched(&outcome.reference, outcome.result);
        }
        changed
    }

    /// Render the HTML fragment for `now`.
    pub fn render(&mut self, now: Duration) -> String {
        self.poll();
        let dimensions = self.dimensions();
        let dash_offset = self.animation.tick(now);
        render_html(&MarkupInput {
            d: self.resolver.active().d,
            dimensions,
            config: &self.props.config,
            children: &self.props.children,
            dash_offset,
            transition: self.animation.span_at(now),
        })
    }

    /// Render a standalone SVG document of the frame at `now`.
    pub fn render_svg(&mut self, now: Duration) -> String {
        self.poll();
        let dimensions = self.dimensions();
        let dash_offset = self.animation.tick(now);
        render_svg_document(&MarkupInput {
            d: self.resolver.active().d,
            dimensions,
            config: &self.props.config,
            children: &self.props.children,
            dash_offset,
            transition: None,
        })
    }

    /// Tear the widget down. Retrievals still in flight complete into a closed channel.
    pub fn unmount(self) {
        tracing::debug!(
            pending = self.fetches.in_flight(),
            "unmounting handwriting widget"
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/component/widget.rs"]
mod tests;
