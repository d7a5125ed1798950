//! A page plus a timeline of input events, replayed frame by frame against an
//! in-memory [`Document`]. Drives `reveal simulate`.

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    animation::{
        request::Timing,
        sequencer::OwnerId,
        variant::AnimationVariant,
    },
    foundation::{
        clock::ManualClock,
        core::{ElementId, Millis, Point, Rect},
        error::{RevealError, RevealResult},
    },
    host::{document::Document, element::Host},
    pointer::{kind::PointerKind, parallax::PARALLAX_SPEED},
    stage::Stage,
    visibility::{
        detector::{COUNTER_TARGET_ATTR, Cue, STAT_NUMBER},
        intersection::Viewport,
        watch::WatchConfig,
    },
};

/// Attribute carrying the scenario name of an element.
pub const NAME_ATTR: &str = "id";

/// How long a replay keeps running after its last event when `until` is unset.
pub const SETTLE_TAIL: Millis = Millis(3000);

fn default_frame_ms() -> u64 {
    16
}

fn default_sample_every() -> u32 {
    6
}

fn default_parallax_speed() -> f64 {
    PARALLAX_SPEED
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Scenario {
    pub viewport: Viewport,
    /// Frame interval.
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
    /// Snapshot every n-th frame. The last frame is always captured.
    #[serde(default = "default_sample_every")]
    pub sample_every: u32,
    /// End of the replay; defaults to the last event plus [`SETTLE_TAIL`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<Millis>,
    #[serde(default)]
    pub sections: Vec<SectionSpec>,
    #[serde(default)]
    pub pointers: Vec<PointerSpec>,
    #[serde(default)]
    pub parallax: Vec<ParallaxSpec>,
    #[serde(default)]
    pub events: Vec<Event>,
}

/// A watched section. Its marked items and counters are laid out as equal
/// horizontal bands inside `bounds`, items first.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SectionSpec {
    pub name: String,
    pub bounds: Rect,
    #[serde(default)]
    pub variant: AnimationVariant,
    #[serde(flatten)]
    pub watch: WatchConfig,
    #[serde(flatten)]
    pub timing: Timing,
    /// Number of marked children.
    #[serde(default)]
    pub items: u32,
    /// Target values of stat counters inside the section.
    #[serde(default)]
    pub counters: Vec<u64>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PointerSpec {
    pub name: String,
    pub bounds: Rect,
    pub effect: PointerKind,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ParallaxSpec {
    pub name: String,
    pub bounds: Rect,
    #[serde(default = "default_parallax_speed")]
    pub speed: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Event {
    pub at: Millis,
    #[serde(flatten)]
    pub action: Action,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Action {
    Scroll { y: f64 },
    Resize { width: f64, height: f64 },
    Pointer { x: f64, y: f64 },
    PointerExit,
    /// Releases the named section, pointer target or parallax layer.
    Unmount { target: String },
    /// Detaches the named element (and its subtree) from the page.
    Remove { target: String },
}

/// A watch firing observed during replay.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fire {
    pub at: Millis,
    pub section: String,
    /// Interpolations the section had in flight right after firing.
    pub in_flight: usize,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementSnapshot {
    pub name: String,
    pub opacity: f64,
    pub transform: String,
    pub filter: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    pub at: Millis,
    pub elements: Vec<ElementSnapshot>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Report {
    pub fires: Vec<Fire>,
    pub frames: Vec<Frame>,
}

impl Report {
    /// Last captured state of the element called `name`.
    pub fn last(&self, name: &str) -> Option<&ElementSnapshot> {
        self.frames
            .last()
            .and_then(|f| f.elements.iter().find(|e| e.name == name))
    }
}

impl Scenario {
    pub fn from_json(s: &str) -> RevealResult<Self> {
        let scenario: Self = serde_json::from_str(s)
            .map_err(|e| RevealError::scenario(format!("parse scenario JSON: {e}")))?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn validate(&self) -> RevealResult<()> {
        if !(self.viewport.width > 0.0 && self.viewport.height > 0.0) {
            return Err(RevealError::scenario("viewport width/height must be > 0"));
        }
        if self.frame_ms == 0 {
            return Err(RevealError::scenario("frame_ms must be > 0"));
        }
        if self.sample_every == 0 {
            return Err(RevealError::scenario("sample_every must be > 0"));
        }

        let mut names = BTreeSet::new();
        let all_names = self
            .sections
            .iter()
            .map(|s| &s.name)
            .chain(self.pointers.iter().map(|p| &p.name))
            .chain(self.parallax.iter().map(|p| &p.name));
        for name in all_names {
            if name.trim().is_empty() {
                return Err(RevealError::scenario("element names must be non-empty"));
            }
            if !names.insert(name.as_str()) {
                return Err(RevealError::scenario(format!("duplicate element name '{name}'")));
            }
        }

        for s in &self.sections {
            s.watch.validate()?;
        }
        for p in &self.pointers {
            p.effect.validate()?;
        }

        let mut last = Millis::ZERO;
        for ev in &self.events {
            if ev.at < last {
                return Err(RevealError::scenario(format!(
                    "events must be in time order ({} after {})",
                    ev.at.0, last.0
                )));
            }
            last = ev.at;
            if let Action::Unmount { target } | Action::Remove { target } = &ev.action
                && !names.contains(target.as_str())
            {
                return Err(RevealError::scenario(format!(
                    "event at {} references unknown element '{target}'",
                    ev.at.0
                )));
            }
        }
        Ok(())
    }

    pub fn end(&self) -> Millis {
        self.until.unwrap_or_else(|| {
            self.events
                .last()
                .map_or(Millis::ZERO, |e| e.at)
                .saturating_add(SETTLE_TAIL)
        })
    }

    /// Replays the scenario from a fresh page.
    pub fn replay(&self) -> RevealResult<Report> {
        self.validate()?;
        let mut page = Page::build(self)?;
        let mut fires = Vec::new();
        let mut frames = Vec::new();

        let owners: Vec<OwnerId> = page.owners.values().copied().collect();
        for owner in owners {
            page.stage.mount(&mut page.doc, owner);
        }
        page.record_fires(Millis::ZERO, &mut fires);

        let end = self.end();
        let mut pending = self.events.iter().peekable();
        let mut frame: u64 = 0;
        loop {
            let now = Millis(frame.saturating_mul(self.frame_ms));
            page.clock.set(now);
            while let Some(ev) = pending.next_if(|e| e.at <= now) {
                page.apply(&ev.action);
                page.record_fires(now, &mut fires);
            }
            page.stage.tick(&mut page.doc);

            let last = now >= end;
            if last || frame % u64::from(self.sample_every) == 0 {
                frames.push(page.snapshot(now));
            }
            if last {
                break;
            }
            frame += 1;
        }

        tracing::debug!(
            fires = fires.len(),
            frames = frames.len(),
            end = end.0,
            "scenario replayed"
        );
        Ok(Report { fires, frames })
    }
}

struct Page {
    doc: Document,
    stage: Stage,
    clock: ManualClock,
    /// Element and owner per scenario name.
    elements: BTreeMap<String, ElementId>,
    owners: BTreeMap<String, OwnerId>,
    sections: Vec<(String, OwnerId)>,
    fired: BTreeMap<OwnerId, u32>,
}

impl Page {
    fn build(sc: &Scenario) -> RevealResult<Self> {
        let clock = ManualClock::new();
        let mut page = Self {
            doc: Document::new(),
            stage: Stage::new(clock.clone(), sc.viewport),
            clock,
            elements: BTreeMap::new(),
            owners: BTreeMap::new(),
            sections: Vec::new(),
            fired: BTreeMap::new(),
        };
        let body = page.doc.body();

        for s in &sc.sections {
            let root = page.named(body, &s.name, s.bounds);
            let bands = band_layout(s.bounds, s.items as usize + s.counters.len());
            for (i, band) in bands.iter().take(s.items as usize).enumerate() {
                let el = page.named(root, &format!("{}/item-{i}", s.name), *band);
                page.doc.add_class(el, &s.watch.marker);
            }
            for (i, (band, value)) in bands
                .iter()
                .skip(s.items as usize)
                .zip(&s.counters)
                .enumerate()
            {
                let el = page.named(root, &format!("{}/stat-{i}", s.name), *band);
                page.doc.add_class(el, STAT_NUMBER);
                page.doc.set_attribute(el, COUNTER_TARGET_ATTR, &value.to_string());
            }

            let mut cues = vec![Cue::entrance(s.variant, s.timing)];
            if !s.counters.is_empty() {
                cues.push(Cue::counters());
            }
            let a = page.stage.watch(s.watch.clone(), cues)?;
            a.node.attach(root);
            page.owners.insert(s.name.clone(), a.owner);
            page.sections.push((s.name.clone(), a.owner));
        }

        for p in &sc.pointers {
            let el = page.named(body, &p.name, p.bounds);
            let a = page.stage.pointer(p.effect)?;
            a.node.attach(el);
            page.owners.insert(p.name.clone(), a.owner);
        }

        for p in &sc.parallax {
            let el = page.named(body, &p.name, p.bounds);
            let a = page.stage.parallax(p.speed)?;
            a.node.attach(el);
            page.owners.insert(p.name.clone(), a.owner);
        }

        Ok(page)
    }

    fn named(&mut self, parent: ElementId, name: &str, bounds: Rect) -> ElementId {
        let el = self.doc.create(parent, bounds);
        self.doc.set_attribute(el, NAME_ATTR, name);
        self.elements.insert(name.to_string(), el);
        el
    }

    fn apply(&mut self, action: &Action) {
        match action {
            Action::Scroll { y } => {
                self.stage.scroll_to(&mut self.doc, *y);
            }
            Action::Resize { width, height } => {
                self.stage.resize(&mut self.doc, *width, *height);
            }
            Action::Pointer { x, y } => {
                self.stage.pointer_move(&mut self.doc, Point::new(*x, *y));
            }
            Action::PointerExit => {
                self.stage.pointer_exit(&mut self.doc);
            }
            Action::Unmount { target } => {
                if let Some(owner) = self.owners.remove(target) {
                    self.stage.unmount(owner);
                }
            }
            Action::Remove { target } => {
                if let Some(&el) = self.elements.get(target) {
                    self.doc.remove(el);
                }
            }
        }
    }

    fn record_fires(&mut self, at: Millis, out: &mut Vec<Fire>) {
        for (name, owner) in &self.sections {
            let count = self.stage.fire_count(*owner);
            let seen = self.fired.entry(*owner).or_insert(0);
            if count > *seen {
                out.push(Fire {
                    at,
                    section: name.clone(),
                    in_flight: self.stage.animator().owned_by(*owner),
                });
                *seen = count;
            }
        }
    }

    fn snapshot(&self, at: Millis) -> Frame {
        let elements = self
            .doc
            .elements()
            .into_iter()
            .filter_map(|el| {
                let name = self.doc.attribute(el, NAME_ATTR)?;
                let style = self.doc.style(el)?;
                Some(ElementSnapshot {
                    name,
                    opacity: style.opacity,
                    transform: style.css_transform(),
                    filter: style.css_filter(),
                    text: self.doc.text(el).unwrap_or_default().to_string(),
                })
            })
            .collect();
        Frame { at, elements }
    }
}

/// Splits `bounds` into `n` equal horizontal bands, top to bottom.
fn band_layout(bounds: Rect, n: usize) -> Vec<Rect> {
    if n == 0 {
        return Vec::new();
    }
    let h = bounds.height() / n as f64;
    (0..n)
        .map(|i| {
            let y0 = bounds.y0 + h * i as f64;
            Rect::new(bounds.x0, y0, bounds.x1, y0 + h)
        })
        .collect()
}

#[cfg(test)]
#[path = "../tests/unit/scenario.rs"]
mod tests;
