use crate::{ADMIN_AUTHOR, Announcement};

use std::collections::HashSet;
use std::thread;

#[test]
fn given_burst_of_announcements_when_created_then_ids_strictly_increase() {
    let ids: Vec<i64> = (0..500)
        .map(|i| Announcement::from_admin(format!("t{i}"), "c").id)
        .collect();

    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn given_concurrent_creators_when_created_then_ids_unique() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(|| {
                (0..200)
                    .map(|_| Announcement::from_admin("t", "c").id)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let ids: Vec<i64> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    let unique: HashSet<i64> = ids.iter().copied().collect();

    assert_eq!(unique.len(), ids.len());
}

#[test]
fn given_admin_announcement_then_important_with_admin_author() {
    let announcement = Announcement::from_admin("Exam timetable", "Out now");

    assert_eq!(announcement.author, ADMIN_AUTHOR);
    assert!(announcement.important);
    assert!(announcement.id >= announcement.date.timestamp_millis());
}
