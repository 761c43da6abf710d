use super::build_panel_test;
use traffic_light_mvu::{Lamp, PanelLayout, TrafficLightModel};

#[test]
fn given_a_fresh_panel_should_render_all_lamps_off() {
    let test = build_panel_test().build();

    assert_eq!(test.renders.count(), 1);
    test.with_latest(|props| {
        assert_eq!(props.lit_lamp(), None);
        for lamp in Lamp::ALL {
            assert_eq!(props.color_of(lamp), "#000000");
        }
    });
}

#[test]
fn given_each_button_when_clicked_should_light_only_its_lamp() {
    let cases = [
        ("stopButton", Lamp::Stop, "red"),
        ("slowButton", Lamp::Slow, "yellow"),
        ("goButton", Lamp::Go, "green"),
    ];

    for (button, expected, color) in cases {
        let mut test = build_panel_test().build();

        test.click(button);

        test.with_latest(|props| {
            assert_eq!(props.lit_lamp(), Some(expected), "clicked {button}");
            for lamp in Lamp::ALL {
                let want = if lamp == expected { color } else { "#000000" };
                assert_eq!(props.color_of(lamp), want, "{lamp} after clicking {button}");
            }
        });
        assert_eq!(test.driver.model(), &TrafficLightModel { lit: Some(expected) });
    }
}

#[test]
fn given_stop_clicked_should_show_red_stop_light_only() {
    let mut test = build_panel_test().build();

    test.click("stopButton");

    test.with_latest(|props| {
        assert_eq!(props.color_of(Lamp::Stop), "red");
        assert_eq!(props.color_of(Lamp::Slow), "#000000");
        assert_eq!(props.color_of(Lamp::Go), "#000000");
    });
}

#[test]
fn given_stop_lit_when_go_clicked_should_replace_stop_with_go() {
    let mut test = build_panel_test().build();

    test.click("stopButton");
    test.click("goButton");

    test.with_latest(|props| {
        assert_eq!(props.color_of(Lamp::Stop), "#000000");
        assert_eq!(props.color_of(Lamp::Slow), "#000000");
        assert_eq!(props.color_of(Lamp::Go), "green");
    });
}

#[test]
fn given_any_click_sequence_should_never_light_two_lamps() {
    let mut test = build_panel_test().build();

    for button in ["goButton", "slowButton", "slowButton", "stopButton", "goButton", "stopButton"] {
        test.click(button);
    }

    assert_eq!(test.renders.count(), 7);
    test.renders.with_renders(|renders| {
        for props in renders {
            assert!(props.lamps.iter().filter(|view| view.lit).count() <= 1);
        }
    });
    test.with_latest(|props| assert_eq!(props.lit_lamp(), Some(Lamp::Stop)));
}

#[test]
fn given_a_lit_lamp_when_container_clicked_should_turn_all_lamps_off() {
    let mut test = build_panel_test().build();

    test.click("slowButton");
    test.click("controlPanel");

    assert_eq!(test.renders.count(), 3);
    test.with_latest(|props| {
        assert_eq!(props.lit_lamp(), None);
        for lamp in Lamp::ALL {
            assert_eq!(props.color_of(lamp), "#000000");
        }
    });
}

#[test]
fn given_a_lit_lamp_when_lamp_elements_clicked_should_keep_it_lit() {
    let mut test = build_panel_test().build();

    test.click("goButton");
    test.click("goLight");
    test.click("stopLight");
    test.click("traffic-light");

    test.with_latest(|props| {
        assert_eq!(props.lit_lamp(), Some(Lamp::Go));
        assert_eq!(props.color_of(Lamp::Go), "green");
        assert_eq!(props.color_of(Lamp::Stop), "#000000");
    });
    assert_eq!(test.driver.model(), &TrafficLightModel { lit: Some(Lamp::Go) });
}

#[test]
fn given_nothing_lit_when_a_lamp_clicked_should_not_light_it() {
    let mut test = build_panel_test().build();

    test.click("slowLight");

    test.with_latest(|props| assert_eq!(props.lit_lamp(), None));
}

#[test]
fn given_custom_identities_should_match_buttons_by_identity() {
    let mut test = build_panel_test()
        .given_layout(PanelLayout {
            stop_button: "halt".into(),
            stop_light: "top".into(),
            ..PanelLayout::default()
        })
        .build();

    test.click("stopButton");
    test.with_latest(|props| assert_eq!(props.lit_lamp(), None));

    test.click("halt");
    test.with_latest(|props| {
        assert_eq!(props.lit_lamp(), Some(Lamp::Stop));
        assert_eq!(props.lamp(Lamp::Stop).element_id, "top");
    });
}
