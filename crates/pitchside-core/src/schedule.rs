//! The schedule view over upcoming matches: chronological, grouped by day,
//! filterable by competition.

use chrono::NaiveDate;

use crate::fixture::Match;

/// Date formats seen in stored matches: the admin form's `2025-04-16` and the
/// demo fixtures' `April 16, 2025`.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%B %d, %Y"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDay {
  /// The date exactly as stored on the matches.
  pub date:    String,
  pub matches: Vec<Match>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
  days:         Vec<ScheduleDay>,
  competitions: Vec<String>,
}

impl Schedule {
  /// Sort by date then time, and group by date.
  ///
  /// Matches whose date does not parse go last, in stored order.
  pub fn from_matches(mut matches: Vec<Match>) -> Self {
    matches.sort_by_cached_key(|m| match parse_date(&m.date) {
      Some(d) => (false, d, m.time.clone()),
      None => (true, NaiveDate::MIN, String::new()),
    });

    let mut schedule = Self::default();
    for m in matches {
      if !schedule.competitions.contains(&m.competition) {
        schedule.competitions.push(m.competition.clone());
      }
      match schedule.days.iter_mut().find(|d| d.date == m.date) {
        Some(day) => day.matches.push(m),
        None => schedule.days.push(ScheduleDay { date: m.date.clone(), matches: vec![m] }),
      }
    }
    schedule
  }

  pub fn days(&self) -> &[ScheduleDay] { &self.days }

  /// Distinct competitions in order of first appearance.
  pub fn competitions(&self) -> &[String] { &self.competitions }

  /// Keep only `competition`'s matches; `None` keeps everything. Days left
  /// empty are dropped; the competition list is unchanged.
  pub fn filter_competition(&self, competition: Option<&str>) -> Self {
    let Some(wanted) = competition else {
      return self.clone();
    };
    let days = self
      .days
      .iter()
      .filter_map(|day| {
        let matches: Vec<Match> =
          day.matches.iter().filter(|m| m.competition == wanted).cloned().collect();
        (!matches.is_empty()).then(|| ScheduleDay { date: day.date.clone(), matches })
      })
      .collect();
    Self { days, competitions: self.competitions.clone() }
  }

  pub fn len(&self) -> usize { self.days.iter().map(|d| d.matches.len()).sum() }

  pub fn is_empty(&self) -> bool { self.days.is_empty() }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
  DATE_FORMATS
    .iter()
    .find_map(|fmt| NaiveDate::parse_from_str(raw.trim(), fmt).ok())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fixture::default_upcoming;

  fn fixture(id: i64, competition: &str, date: &str, time: &str) -> Match {
    Match {
      id,
      competition: competition.into(),
      home_team: format!("Home {id}"),
      away_team: format!("Away {id}"),
      date: date.into(),
      time: time.into(),
      slug: format!("match-{id}"),
      score: None,
      links: 0,
    }
  }

  #[test]
  fn sorts_chronologically_and_groups() {
    let schedule = Schedule::from_matches(vec![
      fixture(1, "Serie A", "2025-05-02", "20:45"),
      fixture(2, "La Liga", "2025-05-01", "21:00"),
      fixture(3, "Serie A", "2025-05-01", "18:00"),
    ]);

    let days: Vec<&str> = schedule.days().iter().map(|d| d.date.as_str()).collect();
    assert_eq!(days, ["2025-05-01", "2025-05-02"]);
    let first: Vec<i64> = schedule.days()[0].matches.iter().map(|m| m.id).collect();
    assert_eq!(first, [3, 2]);
    assert_eq!(schedule.competitions(), ["Serie A", "La Liga"]);
    assert_eq!(schedule.len(), 3);
  }

  #[test]
  fn long_form_dates_parse() {
    let schedule = Schedule::from_matches(default_upcoming().into_iter().rev().collect());
    let ids: Vec<i64> = schedule.days().iter().flat_map(|d| d.matches.iter().map(|m| m.id)).collect();
    assert_eq!(ids, [1, 2, 3, 4]);
  }

  #[test]
  fn unparsable_dates_sort_last_in_stored_order() {
    let schedule = Schedule::from_matches(vec![
      fixture(1, "X", "TBD", ""),
      fixture(2, "X", "2025-05-01", "12:00"),
      fixture(3, "X", "soon", ""),
    ]);
    let days: Vec<&str> = schedule.days().iter().map(|d| d.date.as_str()).collect();
    assert_eq!(days, ["2025-05-01", "TBD", "soon"]);
  }

  #[test]
  fn filter_by_competition() {
    let schedule = Schedule::from_matches(vec![
      fixture(1, "Serie A", "2025-05-02", "20:45"),
      fixture(2, "La Liga", "2025-05-01", "21:00"),
    ]);
    let serie_a = schedule.filter_competition(Some("Serie A"));
    assert_eq!(serie_a.days().len(), 1);
    assert_eq!(serie_a.days()[0].date, "2025-05-02");
    assert_eq!(serie_a.competitions().len(), 2);
    assert_eq!(schedule.filter_competition(None), schedule);
    assert!(schedule.filter_competition(Some("NFL")).is_empty());
  }
}
