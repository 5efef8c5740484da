use std::collections::HashSet;
use std::time::Duration;

use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use crate::animation::TransitionConfig;
use crate::core::{LinearScale, Point, project_points};
use crate::render::{CirclePrimitive, Color};

/// Visual state of one plotted point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderedPointView {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub opacity: f64,
    pub color: Color,
}

impl RenderedPointView {
    #[must_use]
    pub fn lerp(self, target: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            cx: self.cx + (target.cx - self.cx) * t,
            cy: self.cy + (target.cy - self.cy) * t,
            radius: self.radius + (target.radius - self.radius) * t,
            opacity: self.opacity + (target.opacity - self.opacity) * t,
            color: self.color.lerp(target.color, t),
        }
    }

    #[must_use]
    pub fn to_circle(self) -> CirclePrimitive {
        CirclePrimitive::new(self.cx, self.cy, self.radius, self.opacity, self.color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Enter,
    Update,
    Exit,
}

/// One scheduled animation, handed to the drawing backend.
#[derive(Debug, Clone, PartialEq)]
pub struct PointTransition {
    pub id: String,
    pub kind: TransitionKind,
    pub from: RenderedPointView,
    pub to: RenderedPointView,
    pub started_at: Duration,
    pub duration: Duration,
}

/// Enter/update/exit sets produced by one reconciliation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JoinPlan {
    pub entered: Vec<PointTransition>,
    pub updated: Vec<PointTransition>,
    pub exited: Vec<PointTransition>,
}

impl JoinPlan {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entered.len() + self.updated.len() + self.exited.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy)]
struct AnimatedView {
    kind: TransitionKind,
    from: RenderedPointView,
    to: RenderedPointView,
    started_at: Duration,
}

impl AnimatedView {
    fn sample(&self, config: TransitionConfig, now: Duration) -> RenderedPointView {
        let t = config.progress(self.started_at, now);
        if t >= 1.0 {
            self.to
        } else {
            self.from.lerp(self.to, t)
        }
    }

    fn is_finished(&self, config: TransitionConfig, now: Duration) -> bool {
        config.progress(self.started_at, now) >= 1.0
    }

    fn transition(&self, id: &str, duration: Duration) -> PointTransition {
        PointTransition {
            id: id.to_owned(),
            kind: self.kind,
            from: self.from,
            to: self.to,
            started_at: self.started_at,
            duration,
        }
    }
}

/// Keyed data join between datasets and animated point views.
///
/// Views are keyed by point id and kept in first-seen order, which is also
/// the draw order. Every `set_data` restarts the affected views from their
/// currently sampled state, so an interrupted animation is redirected rather
/// than completed.
#[derive(Debug, Clone)]
pub struct PointRenderer {
    config: TransitionConfig,
    views: IndexMap<String, AnimatedView>,
}

impl PointRenderer {
    #[must_use]
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            config,
            views: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> TransitionConfig {
        self.config
    }

    /// Reconciles the views against `points` and schedules transitions at `now`.
    ///
    /// Points with non-finite coordinates are treated as absent. When an id
    /// appears more than once, the first occurrence wins.
    pub fn set_data(
        &mut self,
        points: &[Point],
        x_scale: LinearScale,
        y_scale: LinearScale,
        now: Duration,
    ) -> JoinPlan {
        let config = self.config;
        let duration = config.duration();
        let projected = project_points(points, x_scale, y_scale);

        let mut plan = JoinPlan::default();
        let mut incoming: HashSet<&str> = HashSet::with_capacity(projected.len());
        let mut duplicates = 0_usize;

        for projection in &projected {
            let point = &points[projection.index];
            if !incoming.insert(point.id.as_str()) {
                duplicates += 1;
                continue;
            }

            let target = RenderedPointView {
                cx: projection.cx,
                cy: projection.cy,
                radius: config.point_radius_px,
                opacity: 1.0,
                color: point.color,
            };

            if let Some(view) = self.views.get_mut(point.id.as_str()) {
                // Also revives views that were still fading out.
                let current = view.sample(config, now);
                *view = AnimatedView {
                    kind: TransitionKind::Update,
                    from: current,
                    to: target,
                    started_at: now,
                };
                plan.updated.push(view.transition(&point.id, duration));
            } else {
                let view = AnimatedView {
                    kind: TransitionKind::Enter,
                    from: RenderedPointView {
                        radius: 0.0,
                        opacity: 0.0,
                        ..target
                    },
                    to: target,
                    started_at: now,
                };
                plan.entered.push(view.transition(&point.id, duration));
                self.views.insert(point.id.clone(), view);
            }
        }

        for (id, view) in &mut self.views {
            if view.kind == TransitionKind::Exit || incoming.contains(id.as_str()) {
                continue;
            }
            let current = view.sample(config, now);
            *view = AnimatedView {
                kind: TransitionKind::Exit,
                from: current,
                to: RenderedPointView {
                    radius: 0.0,
                    opacity: 0.0,
                    ..current
                },
                started_at: now,
            };
            plan.exited.push(view.transition(id, duration));
        }

        if duplicates > 0 {
            warn!(duplicates, "ignoring points with duplicate ids");
        }
        debug!(
            entered = plan.entered.len(),
            updated = plan.updated.len(),
            exited = plan.exited.len(),
            "reconciled point views"
        );
        plan
    }

    /// Drops views whose exit has finished and samples the rest at `now`.
    pub fn advance(&mut self, now: Duration) -> Vec<CirclePrimitive> {
        let config = self.config;
        let before = self.views.len();
        self.views.retain(|_, view| {
            !(view.kind == TransitionKind::Exit && view.is_finished(config, now))
        });
        let removed = before - self.views.len();
        if removed > 0 {
            trace!(removed, remaining = self.views.len(), "removed exited views");
        }

        self.views
            .values()
            .map(|view| view.sample(config, now).to_circle())
            .collect()
    }

    /// Returns `true` while any view is still mid-transition at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Duration) -> bool {
        self.views
            .values()
            .any(|view| !view.is_finished(self.config, now))
    }

    #[must_use]
    pub fn view(&self, id: &str, now: Duration) -> Option<RenderedPointView> {
        self.views.get(id).map(|view| view.sample(self.config, now))
    }

    #[must_use]
    pub fn transition_kind(&self, id: &str) -> Option<TransitionKind> {
        self.views.get(id).map(|view| view.kind)
    }

    /// Ids of views not fading out, in draw order.
    pub fn live_ids(&self) -> impl Iterator<Item = &str> {
        self.views
            .iter()
            .filter(|(_, view)| view.kind != TransitionKind::Exit)
            .map(|(id, _)| id.as_str())
    }

    /// Number of views, including ones still fading out.
    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}
