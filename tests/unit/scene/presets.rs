use super::*;

#[test]
fn every_named_preset_resolves_and_validates() {
    for name in PRESET_NAMES {
        let def = preset(name).unwrap();
        def.validate().unwrap();
        assert_eq!(def.background, Some(SCENE_BACKGROUND));
        assert_eq!(
            def.canvas,
            Canvas {
                width: 1920,
                height: 1080
            }
        );
        assert_eq!(def.fps, Fps { num: 30, den: 1 });
    }
}

#[test]
fn unknown_preset_is_a_validation_error() {
    let err = preset("intermission").unwrap_err();
    assert!(matches!(err, GlowfieldError::Validation(_)));
    assert!(err.to_string().contains("opening"));
}

#[test]
fn scene_durations_follow_the_cut() {
    let durations: Vec<u64> = PRESET_NAMES
        .iter()
        .map(|n| preset(n).unwrap().duration.0)
        .collect();
    assert_eq!(durations, vec![105, 105, 120, 120]);
}

#[test]
fn opening_layers_orbs_under_nodes() {
    let def = opening();
    assert_eq!(def.layers.len(), 2);
    let LayerDef::Orbs(orbs) = &def.layers[0] else {
        panic!("expected orbs first");
    };
    assert_eq!(orbs.count, 5);
    assert_eq!(orbs.colors.len(), 4);
    assert_eq!(orbs.colors[0], Color::rgba(0x1c, 0x25, 0x41, 0x80));

    let LayerDef::Nodes(nodes) = &def.layers[1] else {
        panic!("expected nodes second");
    };
    assert_eq!(nodes.count, 35);
    assert!(nodes.show_connections);
}

#[test]
fn middle_scenes_have_orbs_only() {
    for (def, count) in [(reveal(), 4), (features(), 3)] {
        assert_eq!(def.layers.len(), 1);
        let LayerDef::Orbs(orbs) = &def.layers[0] else {
            panic!("expected orbs layer");
        };
        assert_eq!(orbs.count, count);
        assert_eq!(orbs.colors.len(), 3);
    }
}

#[test]
fn closing_has_a_sparser_graph() {
    let def = closing();
    let LayerDef::Nodes(nodes) = &def.layers[1] else {
        panic!("expected nodes layer");
    };
    assert_eq!(nodes.count, 20);
}
