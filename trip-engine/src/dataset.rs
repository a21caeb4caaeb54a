//! Built-in default tables.
//!
//! The curated configuration the shipped tools run on: a twelve-station
//! loop line with bilingual names and signage aliases, the five-question
//! area bank over six candidate areas, display text, right-now rule rows
//! and quick-pick pools. The station, line and question tables can also
//! load from external JSON; this module is the reference wiring and the
//! fixture base for integration tests.

use crate::domain::{Locale, Station, StationId, TextTable};
use crate::facade::{AdviceCard, CompareSpec, EngineTables, QuickPickTable, RightNowTable};
use crate::scorer::{AreaProfile, OptionRule, Question, QuestionBank, RankConfig};
use crate::topology::Line;

fn sid(s: &str) -> StationId {
    StationId::parse(s).unwrap_or_else(|e| panic!("built-in station id {s:?}: {e}"))
}

/// The loop line's station table.
pub fn stations() -> Vec<Station> {
    vec![
        Station::new(sid("shinjuku"), "Shinjuku")
            .with_name(Locale::Ja, "新宿")
            .with_alias("Shinjuku Sta."),
        Station::new(sid("yoyogi"), "Yoyogi").with_name(Locale::Ja, "代々木"),
        Station::new(sid("harajuku"), "Harajuku").with_name(Locale::Ja, "原宿"),
        Station::new(sid("shibuya"), "Shibuya")
            .with_name(Locale::Ja, "渋谷")
            .with_alias("Shibuya Sta."),
        Station::new(sid("ebisu"), "Ebisu").with_name(Locale::Ja, "恵比寿"),
        Station::new(sid("meguro"), "Meguro").with_name(Locale::Ja, "目黒"),
        Station::new(sid("gotanda"), "Gotanda").with_name(Locale::Ja, "五反田"),
        Station::new(sid("osaki"), "Ōsaki").with_name(Locale::Ja, "大崎"),
        Station::new(sid("shinagawa"), "Shinagawa").with_name(Locale::Ja, "品川"),
        Station::new(sid("tamachi"), "Tamachi").with_name(Locale::Ja, "田町"),
        Station::new(sid("hamamatsucho"), "Hamamatsuchō").with_name(Locale::Ja, "浜松町"),
        Station::new(sid("shimbashi"), "Shimbashi")
            .with_name(Locale::Ja, "新橋")
            .with_alias("Shinbashi"),
    ]
}

/// The loop line in clockwise declaration order.
///
/// Terminals are the operational signage names for each rotation, as
/// configured, not derived from the cycle.
pub fn loop_line() -> Line {
    let order = [
        "shinjuku",
        "yoyogi",
        "harajuku",
        "shibuya",
        "ebisu",
        "meguro",
        "gotanda",
        "osaki",
        "shinagawa",
        "tamachi",
        "hamamatsucho",
        "shimbashi",
    ];
    Line::new(
        "kanjo-line",
        order.iter().map(|s| sid(s)).collect(),
        sid("shinagawa"),
        sid("shinjuku"),
    )
    .unwrap_or_else(|e| panic!("built-in line: {e}"))
}

/// The five-question bank over the six candidate areas.
pub fn question_bank() -> QuestionBank {
    let questions = vec![
        Question::new(
            "vibe",
            vec![
                OptionRule::new("nightlife", "reason.vibe.nightlife")
                    .weigh("roppongi", 3)
                    .weigh("shinjuku", 2)
                    .weigh("shibuya", 2),
                OptionRule::new("culture", "reason.vibe.culture")
                    .weigh("asakusa", 3)
                    .weigh("ueno", 3),
                OptionRule::new("shopping", "reason.vibe.shopping")
                    .weigh("ginza", 3)
                    .weigh("shibuya", 2),
                OptionRule::new("calm", "reason.vibe.calm")
                    .weigh("asakusa", 2)
                    .weigh("ueno", 2)
                    .weigh("ginza", 1),
            ],
        ),
        Question::new(
            "sleep",
            vec![
                OptionRule::new("light", "reason.sleep.light")
                    .weigh("asakusa", 2)
                    .weigh("ueno", 2)
                    .weigh("ginza", 2),
                OptionRule::new("dontcare", "reason.sleep.dontcare")
                    .weigh("shinjuku", 1)
                    .weigh("shibuya", 1)
                    .weigh("roppongi", 1),
            ],
        ),
        Question::new(
            "airport",
            vec![
                OptionRule::new("easy", "reason.airport.easy")
                    .weigh("ueno", 3)
                    .weigh("ginza", 2)
                    .weigh("asakusa", 2),
                OptionRule::new("whatever", "reason.airport.whatever")
                    .weigh("shinjuku", 1)
                    .weigh("shibuya", 1),
            ],
        ),
        Question::new(
            "party",
            vec![
                OptionRule::new("most-nights", "reason.party.most-nights")
                    .weigh("roppongi", 3)
                    .weigh("shinjuku", 2)
                    .weigh("shibuya", 2),
                OptionRule::new("some-nights", "reason.party.some-nights")
                    .weigh("shibuya", 2)
                    .weigh("shinjuku", 1)
                    .weigh("ginza", 1),
                OptionRule::new("never", "reason.party.never")
                    .weigh("asakusa", 2)
                    .weigh("ueno", 2),
            ],
        ),
        Question::new(
            "group",
            vec![
                OptionRule::new("solo-friends", "reason.group.solo-friends")
                    .weigh("shinjuku", 2)
                    .weigh("shibuya", 2)
                    .weigh("roppongi", 2),
                OptionRule::new("family", "reason.group.family")
                    .weigh("asakusa", 2)
                    .weigh("ueno", 2)
                    .weigh("ginza", 1),
                OptionRule::new("couple", "reason.group.couple")
                    .weigh("ginza", 2)
                    .weigh("roppongi", 1)
                    .weigh("shibuya", 1),
            ],
        ),
    ];

    // Declaration order is the ranking tie-break; keep it stable.
    let areas = vec![
        AreaProfile::new("shinjuku")
            .attr("nightlife", 5)
            .attr("calm", 1)
            .attr("first-time", 4)
            .attr("airport", 3),
        AreaProfile::new("shibuya")
            .attr("nightlife", 4)
            .attr("calm", 1)
            .attr("first-time", 4)
            .attr("airport", 3),
        AreaProfile::new("roppongi")
            .attr("nightlife", 5)
            .attr("calm", 1)
            .attr("first-time", 3)
            .attr("airport", 2),
        AreaProfile::new("asakusa")
            .attr("nightlife", 1)
            .attr("calm", 5)
            .attr("first-time", 4)
            .attr("airport", 4),
        AreaProfile::new("ginza")
            .attr("nightlife", 2)
            .attr("calm", 4)
            .attr("first-time", 5)
            .attr("airport", 4),
        AreaProfile::new("ueno")
            .attr("nightlife", 2)
            .attr("calm", 4)
            .attr("first-time", 4)
            .attr("airport", 5),
    ];

    QuestionBank::new(questions, areas).unwrap_or_else(|e| panic!("built-in question bank: {e}"))
}

/// Display text for stable keys, per locale.
pub fn text_table() -> TextTable {
    TextTable::new()
        .with("reason.vibe.nightlife", Locale::En, "You wanted nightlife on your doorstep")
        .with("reason.vibe.nightlife", Locale::Ja, "ナイトライフ重視のあなたに")
        .with("reason.vibe.culture", Locale::En, "Old-town culture was your pick")
        .with("reason.vibe.culture", Locale::Ja, "下町文化を選んだあなたに")
        .with("reason.vibe.shopping", Locale::En, "Built around serious shopping")
        .with("reason.vibe.calm", Locale::En, "A calmer pace suits you")
        .with("reason.sleep.light", Locale::En, "Quiet nights for a light sleeper")
        .with("reason.sleep.dontcare", Locale::En, "Noise at night won't bother you")
        .with("reason.airport.easy", Locale::En, "Painless airport transfers")
        .with("reason.airport.easy", Locale::Ja, "空港アクセスが楽")
        .with("reason.airport.whatever", Locale::En, "Airport access wasn't a priority")
        .with("reason.party.most-nights", Locale::En, "Out most nights, so be where it happens")
        .with("reason.party.some-nights", Locale::En, "A few big nights, well connected")
        .with("reason.party.never", Locale::En, "Evenings stay mellow here")
        .with("reason.group.solo-friends", Locale::En, "Easy base for solo travel or friends")
        .with("reason.group.family", Locale::En, "Family-friendly streets and parks")
        .with("reason.group.couple", Locale::En, "Good spots for two")
}

/// Right-now rule rows.
pub fn right_now_table() -> RightNowTable {
    RightNowTable::new()
        // Exact rows.
        .exact(
            "shinjuku",
            "hungry",
            "late",
            AdviceCard::new(
                "Late ramen in the alleys",
                "Walk the Omoide Yokochō lanes and queue where locals queue.",
                "Skip the touts on the main drag offering all-you-can-drink.",
            ),
        )
        .exact(
            "asakusa",
            "curious",
            "morning",
            AdviceCard::new(
                "Beat the crowds to the temple",
                "See Sensō-ji before nine, then coffee on a side street.",
                "Don't start with the souvenir arcade while it's packed.",
            ),
        )
        .exact(
            "ginza",
            "rainy",
            "afternoon",
            AdviceCard::new(
                "Department store afternoon",
                "Work the basement food halls and the stationery floors.",
                "Avoid the open-air walk to the fish market in the rain.",
            ),
        )
        // Situation defaults, any time of day.
        .situation_default(
            "shinjuku",
            "hungry",
            AdviceCard::new(
                "Eat where the offices eat",
                "Pick a lunch-set place one street off the station.",
                "Avoid restaurants with photo menus facing the station exit.",
            ),
        )
        .situation_default(
            "ueno",
            "tired",
            AdviceCard::new(
                "Park bench, then one museum",
                "Rest in Ueno Park and pick a single gallery wing.",
                "Don't try to cover the whole museum row today.",
            ),
        )
        // Location generics.
        .location_generic(
            "shinjuku",
            AdviceCard::new(
                "Shinjuku, simply",
                "Cross to the west side for the free observation decks.",
                "Avoid dragging luggage through the station at rush hour.",
            ),
        )
        .location_generic(
            "asakusa",
            AdviceCard::new(
                "Old town on foot",
                "Walk the riverside path toward the brewery hall.",
                "Don't taxi anywhere you can walk in fifteen minutes.",
            ),
        )
        // Global generic.
        .global_generic(AdviceCard::new(
            "Follow the side streets",
            "Pick the narrowest street with lanterns and follow it.",
            "Avoid planning the whole evening from one spot.",
        ))
}

/// Quick-pick query and phrase pools.
pub fn quick_pick_table() -> QuickPickTable {
    QuickPickTable::new()
        .combo(
            "shinjuku",
            "adventurous",
            "solo",
            &[
                "standing bar golden gai",
                "late night ramen shinjuku",
                "omoide yokocho yakitori",
                "shinjuku rooftop view",
                "retro game arcade kabukicho",
            ],
        )
        .combo(
            "asakusa",
            "relaxed",
            "family",
            &[
                "sumida river cruise",
                "asakusa rickshaw ride",
                "melon pan kagetsudo",
                "sensoji evening lightup",
            ],
        )
        .combo(
            "roppongi",
            "adventurous",
            "friends",
            &[
                "roppongi art night",
                "midtown rooftop bar",
                "late club roppongi",
                "mori tower city view",
            ],
        )
        .area(
            "shinjuku",
            &["shinjuku gyoen picnic", "department store food hall", "golden gai daytime"],
        )
        .area("shibuya", &["shibuya crossing view", "record shops udagawacho"])
        .area("roppongi", &["roppongi hills walk", "national art center"])
        .area("asakusa", &["kappabashi kitchen street", "asakusa culture center view"])
        .area("ginza", &["ginza gallery hop", "kabukiza single act"])
        .area("ueno", &["ueno park museums", "ameyoko market snacks"])
        .global(&["neighborhood walk", "local coffee shop", "station bento hunt"])
        .phrases(&[
            "quiet at this hour",
            "best before the crowds",
            "locals' favorite today",
            "short walk from the station",
            "good in any weather",
            "worth the small queue",
            "cheap and cheerful",
            "open late tonight",
        ])
}

/// All default tables, ready for [`crate::facade::Engine::new`].
pub fn default_tables() -> EngineTables {
    EngineTables {
        stations: stations(),
        line: loop_line(),
        bank: question_bank(),
        rank_config: RankConfig::default(),
        compare_spec: CompareSpec::default(),
        right_now: right_now_table(),
        quick_picks: quick_pick_table(),
        text: text_table(),
    }
}
