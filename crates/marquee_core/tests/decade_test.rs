use marquee_core::{decade_of, decades_descending, group_by_decade, EnrichedMovie, MovieBuilder};

fn movie(id: u64, title: &str, release_date: &str) -> EnrichedMovie {
    MovieBuilder::default()
        .id(id)
        .title(title)
        .release_date(release_date)
        .build()
        .unwrap()
        .enrich(false)
}

#[test]
fn test_groups_by_decade_sorted_ascending() {
    let movies = vec![
        movie(3, "Millennium", "2001-03-05"),
        movie(2, "Late Nineties", "1999-01-01"),
        movie(1, "Mid Nineties", "1994-09-10"),
    ];

    let groups = group_by_decade(movies);

    assert_eq!(groups.len(), 2);
    let nineties: Vec<u64> = groups["1990s"].iter().map(|m| m.id.value()).collect();
    assert_eq!(nineties, vec![1, 2]);
    let two_thousands: Vec<u64> = groups["2000s"].iter().map(|m| m.id.value()).collect();
    assert_eq!(two_thousands, vec![3]);
}

#[test]
fn test_decade_label_uses_first_three_characters() {
    assert_eq!(decade_of("1957-04-10"), "1950s");
    assert_eq!(decade_of("2019"), "2010s");
    assert_eq!(decade_of("19"), "unknown");
}

#[test]
fn test_decades_descending_for_display() {
    let groups = group_by_decade(vec![
        movie(1, "A", "1972-03-14"),
        movie(2, "B", "2008-07-16"),
        movie(3, "C", "1994-09-23"),
    ]);

    assert_eq!(decades_descending(&groups), vec!["2000s", "1990s", "1970s"]);
}

#[test]
fn test_grouping_keeps_favorite_flags() {
    let favorite = MovieBuilder::default()
        .id(7u64)
        .release_date("1999-10-15")
        .build()
        .unwrap()
        .enrich(true);

    let groups = group_by_decade(vec![favorite]);
    assert!(groups["1990s"][0].is_favorite);
}
