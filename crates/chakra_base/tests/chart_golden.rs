//! Known-value checks for sign, house, navamsha and nakshatra lookups.
//!
//! Pure-math tests (no engine needed).

use chakra_base::{
    CelestialBody, ChartData, ChartView, DivisionalChart, Nakshatra, NakshatraLord, Rashi,
    derive_ketu, nakshatra_from_longitude, navamsha_longitude, whole_sign_house, zodiac_sign,
};

// ---------------------------------------------------------------------------
// Navamsha sign-boundary table
// ---------------------------------------------------------------------------

#[test]
fn navamsha_sign_starts() {
    // Start of each rashi maps to the first navamsha of its element.
    let expected = [0.0, 270.0, 180.0, 90.0, 0.0, 270.0, 180.0, 90.0, 0.0, 270.0, 180.0, 90.0];
    for (i, &want) in expected.iter().enumerate() {
        let lon = i as f64 * 30.0;
        let got = navamsha_longitude(lon);
        assert!((got - want).abs() < 1e-9, "rashi {i}: got {got}, want {want}");
    }
}

#[test]
fn navamsha_segments_of_mesha() {
    // Mesha's nine segments run Mesha..Dhanu.
    for seg in 0..9u8 {
        let lon = seg as f64 * 30.0 / 9.0 + 0.1;
        assert_eq!(zodiac_sign(navamsha_longitude(lon)), Rashi::from_index(seg));
    }
}

#[test]
fn navamsha_segments_of_vrishabha() {
    // Vrishabha (earth) starts at Makara and wraps through Mesha.
    let expected = [9u8, 10, 11, 0, 1, 2, 3, 4, 5];
    for (seg, &want) in expected.iter().enumerate() {
        let lon = 30.0 + seg as f64 * 30.0 / 9.0 + 0.1;
        assert_eq!(zodiac_sign(navamsha_longitude(lon)).index(), want, "segment {seg}");
    }
}

#[test]
fn navamsha_is_nine_per_sign() {
    // 108 segments land 9 times on each of the 12 rashis.
    let mut counts = [0u8; 12];
    for rashi in 0..12 {
        for seg in 0..9 {
            let lon = rashi as f64 * 30.0 + seg as f64 * 30.0 / 9.0 + 1.0;
            counts[zodiac_sign(navamsha_longitude(lon)).index() as usize] += 1;
        }
    }
    assert_eq!(counts, [9; 12]);
}

// ---------------------------------------------------------------------------
// Houses, nakshatras, Ketu
// ---------------------------------------------------------------------------

#[test]
fn cancer_ascendant_leo_planet_house_2() {
    assert_eq!(zodiac_sign(95.0), Rashi::Karka);
    assert_eq!(whole_sign_house(125.0, 95.0), 2);
}

#[test]
fn ashwini_pada_1_ketu() {
    let info = nakshatra_from_longitude(0.0);
    assert_eq!(info.nakshatra, Nakshatra::Ashwini);
    assert_eq!(info.pada, 1);
    assert_eq!(info.lord, NakshatraLord::Ketu);
}

#[test]
fn nakshatra_sweep_all_27() {
    let span = 360.0 / 27.0;
    for i in 0..27u8 {
        let lon = i as f64 * span + span / 2.0;
        let info = nakshatra_from_longitude(lon);
        assert_eq!(info.nakshatra_index, i, "nakshatra at {lon} deg");
        assert_eq!(info.pada, 3);
    }
}

#[test]
fn ketu_from_true_node() {
    let ketu = derive_ketu(&CelestialBody::new("true Node", 10.0, ""));
    assert_eq!(ketu.name, "Ketu");
    assert_eq!(ketu.longitude, 190.0);
}

// ---------------------------------------------------------------------------
// Full payload
// ---------------------------------------------------------------------------

const PAYLOAD: &str = r#"{
    "initDate": [{"year": 2000, "month": 1, "day": 1, "hour": 12, "minute": 0,
                  "second": 0, "jd_ut": 2451545.0}],
    "planets": [
        {"name": "Sun", "long": 256.5, "long_s": "16 Sg 30", "speed": 1.02},
        {"name": "Moon", "long": 200.0, "long_s": "20 Li 00", "speed": 13.1},
        {"name": "mean Node", "long": 100.0, "long_s": "10 Cn 00", "speed": -0.05}
    ],
    "ascmc": [{"name": "Asc", "long": 95.0, "long_s": "5 Cn 00"}],
    "house": []
}"#;

#[test]
fn d1_chart_view() {
    let data = ChartData::from_json(PAYLOAD).unwrap();
    let view = ChartView::build(&data, DivisionalChart::D1).unwrap();

    assert_eq!(view.ascendant_rashi, Rashi::Karka);
    assert_eq!(view.houses.len(), 5);
    let names = |h: u8| -> Vec<&str> { view.houses[h].iter().map(|b| b.name.as_str()).collect() };
    assert_eq!(names(1), ["Asc", "mean Node"]);
    assert_eq!(names(4), ["Moon"]);
    assert_eq!(names(6), ["Sun"]);
    // Ketu at 280 = Makara, house 7
    assert_eq!(names(7), ["Ketu"]);
    assert!(names(2).is_empty());
}

#[test]
fn d9_chart_view() {
    let data = ChartData::from_json(PAYLOAD).unwrap();
    let view = ChartView::build(&data, DivisionalChart::D9).unwrap();

    // Asc 95 = Karka 5 deg → segment 1 of a water sign → Simha
    assert_eq!(view.ascendant_rashi, Rashi::Simha);
    assert_eq!(view.detail("Asc").map(|d| d.house), Some(1));
    // Ascendant nakshatra stays on the D-1 longitude (Pushya)
    assert_eq!(view.ascendant_nakshatra.nakshatra, Nakshatra::Pushya);
    assert_eq!(view.houses.len(), 5);
}
