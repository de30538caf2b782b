#![allow(dead_code)]

use handlog_engine::event::EventRow;

/// The three-handed example hand: George on the button, Mo small blind,
/// Connor big blind. Rows are in chronological order, without markers.
pub fn example_hand_rows() -> Vec<EventRow> {
    [
        ("Player stacks: #1 \"George @ ZuSkGJ10Lh\" (114.14) | #4 \"Mo @ C2SGJZ5XJ6\" (172.60) | #8 \"Connor @ UZnSnRINEa\" (221.00)", "2023-10-03T05:12:09.521Z", "169630992952101"),
        ("\"Mo @ C2SGJZ5XJ6\" posts a small blind of 0.50", "2023-10-03T05:12:09.521Z", "169630992952105"),
        ("\"Connor @ UZnSnRINEa\" posts a big blind of 1.00", "2023-10-03T05:12:09.521Z", "169630992952106"),
        ("\"George @ ZuSkGJ10Lh\" folds", "2023-10-03T05:12:10.778Z", "169630993077800"),
        ("\"Mo @ C2SGJZ5XJ6\" raises to 2.50", "2023-10-03T05:12:12.972Z", "169630993297200"),
        ("\"Connor @ UZnSnRINEa\" calls 2.50", "2023-10-03T05:12:14.307Z", "169630993430700"),
        ("Flop:  [K♦, 10♠, 10♦]", "2023-10-03T05:12:15.136Z", "169630993513600"),
        ("\"Mo @ C2SGJZ5XJ6\" bets 2.50", "2023-10-03T05:12:19.964Z", "169630993996400"),
        ("\"Connor @ UZnSnRINEa\" calls 2.50", "2023-10-03T05:12:21.282Z", "169630994128200"),
        ("Turn: K♦, 10♠, 10♦ [5♠]", "2023-10-03T05:12:22.141Z", "169630994214100"),
        ("\"Mo @ C2SGJZ5XJ6\" bets 5.00", "2023-10-03T05:12:27.351Z", "169630994735100"),
        ("\"Connor @ UZnSnRINEa\" folds", "2023-10-03T05:12:41.573Z", "169630996157300"),
        ("Uncalled bet of 5.00 returned to \"Mo @ C2SGJZ5XJ6\"", "2023-10-03T05:12:42.404Z", "169630996240400"),
        ("\"Mo @ C2SGJZ5XJ6\" collected 10.00 from pot", "2023-10-03T05:12:42.404Z", "169630996240401"),
    ]
    .iter()
    .map(|(d, t, s)| EventRow::new(*d, *t, *s))
    .collect()
}

/// The example hand wrapped in start/end markers, chronological.
pub fn example_log_rows(number: u32) -> Vec<EventRow> {
    let mut rows = vec![EventRow::new(
        format!("-- starting hand #{number} (id: ex{number}) (No Limit Texas Hold'em) (dealer: \"George @ ZuSkGJ10Lh\") --"),
        "2023-10-03T05:12:09.521Z",
        "169630992952100",
    )];
    rows.extend(example_hand_rows());
    rows.push(EventRow::new(
        format!("-- ending hand #{number} --"),
        "2023-10-03T05:12:42.404Z",
        "169630996240402",
    ));
    rows
}
