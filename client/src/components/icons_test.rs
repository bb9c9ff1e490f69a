use super::*;

const ALL: [IconKind; 15] = [
    IconKind::Anchor,
    IconKind::ArrowRight,
    IconKind::Briefcase,
    IconKind::Check,
    IconKind::ChevronsLeftRight,
    IconKind::CircleCheck,
    IconKind::Droplets,
    IconKind::Eraser,
    IconKind::Layers,
    IconKind::Moon,
    IconKind::ScanLine,
    IconKind::Send,
    IconKind::ShieldCheck,
    IconKind::Sun,
    IconKind::Trophy,
];

#[test]
fn every_icon_has_path_data() {
    for kind in ALL {
        let paths = kind.paths();
        assert!(!paths.is_empty(), "{kind:?}");
        for d in paths {
            assert!(d.starts_with('M') || d.starts_with('m'), "{kind:?}: {d}");
        }
    }
}
