use super::*;
use crate::{
    animation::{ease::Ease, property::Property, request::Motion},
    foundation::core::Rect,
    host::document::Document,
};

/// Records every request instead of interpolating.
#[derive(Default)]
struct RecordingSequencer {
    runs: Vec<(OwnerId, AnimationRequest)>,
    cancelled: Vec<OwnerId>,
}

impl Sequencer for RecordingSequencer {
    fn run(
        &mut self,
        _host: &mut dyn Host,
        owner: OwnerId,
        request: &AnimationRequest,
    ) -> Option<RunId> {
        self.runs.push((owner, request.clone()));
        Some(RunId(self.runs.len() as u64))
    }

    fn retarget(
        &mut self,
        _host: &mut dyn Host,
        _owner: OwnerId,
        _element: ElementId,
        _targets: &[(Property, f64)],
        _duration: Millis,
        _ease: Ease,
    ) -> Option<RunId> {
        None
    }

    fn cancel_owner(&mut self, owner: OwnerId) -> usize {
        self.cancelled.push(owner);
        0
    }
}

struct Section {
    doc: Document,
    root: ElementId,
    items: Vec<ElementId>,
}

fn section(items: usize) -> Section {
    let mut doc = Document::new();
    let body = doc.body();
    let root = doc.create(body, Rect::new(0.0, 1000.0, 800.0, 1400.0));
    let items = (0..items)
        .map(|i| {
            let y = 1000.0 + 100.0 * i as f64;
            let el = doc.create(root, Rect::new(0.0, y, 800.0, y + 100.0));
            doc.add_class(el, ANIMATE_ITEM_CLASS);
            el
        })
        .collect();
    Section { doc, root, items }
}

const ANIMATE_ITEM_CLASS: &str = crate::animation::variant::ANIMATE_ITEM;

fn mounted(s: &Section, variant: AnimationVariant, config: WatchConfig) -> Watch {
    let mut w = Watch::entrance(OwnerId(7), variant, config, Timing::default());
    w.node_ref().attach(s.root);
    assert_eq!(w.mount(&s.doc), Transition::Armed);
    w
}

#[test]
fn fires_one_staggered_request_over_marked_items() {
    let mut s = section(4);
    let mut seq = RecordingSequencer::default();
    let mut w = mounted(&s, AnimationVariant::FadeUp, WatchConfig::default().with_threshold(0.2));

    assert!(w.observe(0.1, &mut s.doc, &mut seq).is_empty());
    let runs = w.observe(0.25, &mut s.doc, &mut seq);
    assert_eq!(runs.len(), 1);
    assert_eq!(seq.runs.len(), 1);

    let (owner, req) = &seq.runs[0];
    assert_eq!(*owner, OwnerId(7));
    assert_eq!(req.targets, s.items);
    assert_eq!(
        req.motion,
        Motion::Variant {
            variant: AnimationVariant::FadeUp
        }
    );
    assert_eq!(w.state(), WatchState::Disposed);
    assert_eq!(w.fire_count(), 1);
}

#[test]
fn unmarked_root_animates_itself_unless_variant_needs_items() {
    let mut s = section(0);
    let mut seq = RecordingSequencer::default();
    let mut w = mounted(&s, AnimationVariant::Scale, WatchConfig::default());
    w.observe(1.0, &mut s.doc, &mut seq);
    assert_eq!(seq.runs[0].1.targets, vec![s.root]);

    let mut seq = RecordingSequencer::default();
    let mut w = mounted(&s, AnimationVariant::StaggerUp, WatchConfig::default());
    let runs = w.observe(1.0, &mut s.doc, &mut seq);
    assert!(runs.is_empty());
    assert!(seq.runs.is_empty());
    // the firing still happened and consumed the one-shot watch
    assert_eq!(w.fire_count(), 1);
    assert_eq!(w.state(), WatchState::Disposed);
}

#[test]
fn once_watch_ignores_later_entries() {
    let mut s = section(2);
    let mut seq = RecordingSequencer::default();
    let mut w = mounted(&s, AnimationVariant::FadeUp, WatchConfig::default());
    for r in [1.0, 0.0, 1.0, 0.0, 1.0] {
        w.observe(r, &mut s.doc, &mut seq);
    }
    assert_eq!(seq.runs.len(), 1);
}

#[test]
fn repeating_watch_reissues_on_every_entry() {
    let mut s = section(2);
    let mut seq = RecordingSequencer::default();
    let mut w = mounted(&s, AnimationVariant::FadeUp, WatchConfig::default().repeating());
    for r in [1.0, 0.9, 0.0, 0.5, 0.0, 0.2] {
        w.observe(r, &mut s.doc, &mut seq);
    }
    assert_eq!(seq.runs.len(), 3);
    assert!(w.state().is_watching());
}

#[test]
fn unattached_root_never_arms() {
    let mut s = section(2);
    let mut seq = RecordingSequencer::default();
    let mut w = Watch::entrance(
        OwnerId(1),
        AnimationVariant::FadeUp,
        WatchConfig::default(),
        Timing::default(),
    );
    assert_eq!(w.mount(&s.doc), Transition::Stay);
    assert_eq!(w.state(), WatchState::Unarmed);
    assert!(w.observe(1.0, &mut s.doc, &mut seq).is_empty());
    assert!(seq.runs.is_empty());
}

#[test]
fn unmount_before_firing_issues_nothing_and_cancels_owner() {
    let mut s = section(3);
    let mut seq = RecordingSequencer::default();
    let mut w = mounted(&s, AnimationVariant::FadeUp, WatchConfig::default());
    w.unmount(&mut seq);
    assert_eq!(w.state(), WatchState::Disposed);
    assert_eq!(seq.cancelled, vec![OwnerId(7)]);
    w.observe(1.0, &mut s.doc, &mut seq);
    assert!(seq.runs.is_empty());
}

#[test]
fn counters_read_their_target_attribute() {
    let mut doc = Document::new();
    let body = doc.body();
    let root = doc.create(body, Rect::new(0.0, 0.0, 800.0, 400.0));
    let a = doc.create(root, Rect::new(0.0, 0.0, 100.0, 40.0));
    let b = doc.create(root, Rect::new(0.0, 50.0, 100.0, 90.0));
    doc.add_class(a, STAT_NUMBER);
    doc.add_class(b, STAT_NUMBER);
    doc.set_attribute(a, COUNTER_TARGET_ATTR, "150");
    doc.set_attribute(b, COUNTER_TARGET_ATTR, "many");

    let reqs = resolve_cues(&doc, root, ANIMATE_ITEM_CLASS, &[Cue::counters()]);
    assert_eq!(reqs.len(), 2);
    assert_eq!(reqs[0].targets, vec![a]);
    assert_eq!(reqs[0].motion, Motion::Count { from: 0, to: 150 });
    assert_eq!(reqs[0].timing.duration, Millis(2000));
    assert_eq!(reqs[1].motion, Motion::Count { from: 0, to: 0 });
}

#[test]
fn element_cue_skips_detached_targets() {
    let mut s = section(1);
    let target = NodeRef::new();
    target.attach(s.items[0]);
    let cues = vec![
        Cue::Element {
            target: target.clone(),
            variant: AnimationVariant::Blur,
            timing: Timing::default(),
        },
        Cue::entrance(AnimationVariant::FadeUp, Timing::default().with_delay(Millis(200))),
    ];
    assert_eq!(resolve_cues(&s.doc, s.root, ANIMATE_ITEM_CLASS, &cues).len(), 2);

    s.doc.remove(s.items[0]);
    let reqs = resolve_cues(&s.doc, s.root, ANIMATE_ITEM_CLASS, &cues);
    // the entrance falls back to the root once its only item is gone
    assert_eq!(reqs.len(), 1);
    assert_eq!(reqs[0].targets, vec![s.root]);
    assert_eq!(reqs[0].timing.delay, Millis(200));
}

#[test]
fn check_measures_against_the_viewport() {
    let mut s = section(1);
    let mut seq = RecordingSequencer::default();
    let mut w = mounted(&s, AnimationVariant::FadeUp, WatchConfig::default().with_threshold(0.2));
    let mut vp = Viewport::new(800.0, 600.0);
    assert!(w.check(&vp, &mut s.doc, &mut seq).is_empty());
    // 1000..1400 against 500..1100 shows a quarter of the section
    vp.scroll_y = 500.0;
    assert_eq!(w.check(&vp, &mut s.doc, &mut seq).len(), 1);
}
