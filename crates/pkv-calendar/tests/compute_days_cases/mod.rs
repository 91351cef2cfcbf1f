use chrono::NaiveDate;
use pkv_calendar::Cycle;

pub struct ComputeDaysCase {
    pub name: &'static str,
    pub cycle: Cycle,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub expected: &'static [(i32, u32, u32)],
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

fn cycle(weekday: u8, monthday: i8, interval: u32, start: NaiveDate, end: NaiveDate) -> Cycle {
    Cycle::new(start, end)
        .on(weekday, monthday)
        .every(interval)
        .at(1800, 900)
}

pub fn compute_days_cases() -> Vec<ComputeDaysCase> {
    let jan1 = date(2023, 1, 1);
    let dec31 = date(2023, 12, 31);
    let mar1 = date(2023, 3, 1);
    let mar5 = date(2023, 3, 5);
    let mar31 = date(2023, 3, 31);

    vec![
        ComputeDaysCase {
            name: "every day",
            cycle: cycle(0, 0, 0, jan1, dec31),
            start: mar1,
            end: mar5,
            expected: &[(2023, 3, 1), (2023, 3, 2), (2023, 3, 3), (2023, 3, 4)],
        },
        ComputeDaysCase {
            name: "every day, short period",
            cycle: cycle(0, 0, 0, mar1, mar5),
            start: jan1,
            end: dec31,
            expected: &[(2023, 3, 1), (2023, 3, 2), (2023, 3, 3), (2023, 3, 4)],
        },
        ComputeDaysCase {
            name: "every Friday",
            cycle: cycle(5, 0, 1, jan1, dec31),
            start: mar1,
            end: mar31,
            expected: &[(2023, 3, 3), (2023, 3, 10), (2023, 3, 17), (2023, 3, 24)],
        },
        ComputeDaysCase {
            name: "every Friday, short period",
            cycle: cycle(5, 0, 0, mar1, mar31),
            start: jan1,
            end: dec31,
            expected: &[(2023, 3, 3), (2023, 3, 10), (2023, 3, 17), (2023, 3, 24)],
        },
        ComputeDaysCase {
            name: "every second Sunday in every second month",
            cycle: cycle(7, 2, 2, jan1, dec31),
            start: mar1,
            end: dec31,
            expected: &[
                (2023, 3, 12),
                (2023, 5, 14),
                (2023, 7, 9),
                (2023, 9, 10),
                (2023, 11, 12),
            ],
        },
        ComputeDaysCase {
            name: "every second Sunday in every second month, short period",
            cycle: cycle(7, 2, 2, mar1, dec31),
            start: jan1,
            end: dec31,
            expected: &[
                (2023, 3, 12),
                (2023, 5, 14),
                (2023, 7, 9),
                (2023, 9, 10),
                (2023, 11, 12),
            ],
        },
        ComputeDaysCase {
            name: "every other Sunday",
            cycle: cycle(7, 0, 2, jan1, dec31),
            start: mar1,
            end: date(2023, 4, 1),
            // 2023-01-01 is a Sunday; every other one lands on 01-15, ..., 03-12, 03-26
            expected: &[(2023, 3, 12), (2023, 3, 26)],
        },
        ComputeDaysCase {
            name: "every 3 days",
            cycle: cycle(0, 0, 3, jan1, dec31),
            start: date(2023, 1, 5),
            end: date(2023, 1, 15),
            expected: &[(2023, 1, 7), (2023, 1, 10), (2023, 1, 13)],
        },
        ComputeDaysCase {
            name: "first Thursday of the month",
            cycle: cycle(4, 1, 0, jan1, dec31),
            start: jan1,
            end: date(2023, 4, 1),
            expected: &[(2023, 1, 5), (2023, 2, 2), (2023, 3, 2)],
        },
        ComputeDaysCase {
            name: "second-to-last Wednesday every two months",
            cycle: cycle(3, -2, 2, jan1, dec31),
            start: jan1,
            end: date(2023, 7, 1),
            expected: &[(2023, 1, 18), (2023, 3, 22), (2023, 5, 24)],
        },
        ComputeDaysCase {
            name: "third of every month",
            cycle: cycle(0, 3, 1, date(2023, 1, 10), dec31),
            start: jan1,
            end: date(2023, 4, 1),
            expected: &[(2023, 2, 3), (2023, 3, 3)],
        },
        ComputeDaysCase {
            name: "last day of every month",
            cycle: cycle(0, -1, 1, jan1, dec31),
            start: jan1,
            end: date(2023, 5, 1),
            expected: &[(2023, 1, 31), (2023, 2, 28), (2023, 3, 31), (2023, 4, 30)],
        },
        ComputeDaysCase {
            name: "fifth Monday falls through to months that have one",
            cycle: cycle(1, 5, 1, jan1, dec31),
            start: jan1,
            end: dec31,
            expected: &[(2023, 1, 30), (2023, 5, 29), (2023, 7, 31), (2023, 10, 30)],
        },
        ComputeDaysCase {
            name: "day 31 skips short months",
            cycle: cycle(0, 31, 1, jan1, dec31),
            start: jan1,
            end: date(2023, 9, 1),
            expected: &[
                (2023, 1, 31),
                (2023, 3, 31),
                (2023, 5, 31),
                (2023, 7, 31),
                (2023, 8, 31),
            ],
        },
        ComputeDaysCase {
            name: "cycle end date is exclusive",
            cycle: cycle(5, 0, 1, jan1, date(2023, 3, 24)),
            start: mar1,
            end: dec31,
            expected: &[(2023, 3, 3), (2023, 3, 10), (2023, 3, 17)],
        },
    ]
}
