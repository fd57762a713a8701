// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The people being compared.
//!
//! [`Board`] is a single-source-of-truth store: the list of people changes
//! only through [`Board::dispatch`], and every subscriber is called with the
//! new list after each successful [`Action`]. Conversion and layout never
//! read the board directly; [`Board::compare`] feeds them each person's zone.

use crate::converter::{parse_timezone, ConversionResult, TimeSpec};
use crate::error::{Error, Result};
use crate::timeline::{build_timeline, CenteredTime, HourFormat, SunWindow, Timeline};
use log::debug;
use std::collections::HashSet;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named person in an IANA timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Person {
    pub id: u64,
    pub name: String,
    pub timezone: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub role: Option<String>,
}

/// Every way the board can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add {
        name: String,
        timezone: String,
        role: Option<String>,
    },
    Rename {
        id: u64,
        name: String,
    },
    SetTimezone {
        id: u64,
        timezone: String,
    },
    SetRole {
        id: u64,
        role: Option<String>,
    },
    Remove {
        id: u64,
    },
    Clear,
}

type Subscriber = Box<dyn FnMut(&[Person])>;

#[derive(Default)]
pub struct Board {
    people: Vec<Person>,
    next_id: u64,
    subscribers: Vec<Subscriber>,
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("people", &self.people)
            .field("next_id", &self.next_id)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

/// One person's row: their converted time and timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison<'a> {
    pub person: &'a Person,
    pub result: ConversionResult,
    pub timeline: Timeline,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a saved list, re-validating every record.
    ///
    /// Ids must be unique, and the largest must leave room for the next one.
    pub fn from_people(people: Vec<Person>) -> Result<Self> {
        let mut ids = HashSet::with_capacity(people.len());
        for person in &people {
            validate_name(&person.name)?;
            parse_timezone(&person.timezone)?;
            if !ids.insert(person.id) {
                return Err(Error::DuplicatePerson(person.id));
            }
        }
        let next_id = match people.iter().map(|p| p.id).max() {
            Some(max) => max.checked_add(1).ok_or(Error::IdsExhausted(max))?,
            None => 0,
        };
        Ok(Self {
            people,
            next_id,
            subscribers: Vec::new(),
        })
    }

    #[inline]
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn get(&self, id: u64) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    /// Call `subscriber` with the list after every successful action.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&[Person]) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Apply an action. Returns the id of the person it touched, if any.
    ///
    /// A rejected action leaves the board unchanged and notifies no one.
    pub fn dispatch(&mut self, action: Action) -> Result<Option<u64>> {
        debug!("dispatch {action:?}");
        let touched = match action {
            Action::Add {
                name,
                timezone,
                role,
            } => {
                let name = validate_name(&name)?;
                parse_timezone(&timezone)?;
                let id = self.next_id;
                self.next_id = id.checked_add(1).ok_or(Error::IdsExhausted(id))?;
                self.people.push(Person {
                    id,
                    name,
                    timezone: timezone.trim().to_owned(),
                    role: normalize_role(role),
                });
                Some(id)
            }
            Action::Rename { id, name } => {
                let name = validate_name(&name)?;
                self.person_mut(id)?.name = name;
                Some(id)
            }
            Action::SetTimezone { id, timezone } => {
                parse_timezone(&timezone)?;
                self.person_mut(id)?.timezone = timezone.trim().to_owned();
                Some(id)
            }
            Action::SetRole { id, role } => {
                self.person_mut(id)?.role = normalize_role(role);
                Some(id)
            }
            Action::Remove { id } => {
                let index = self
                    .people
                    .iter()
                    .position(|p| p.id == id)
                    .ok_or(Error::UnknownPerson(id))?;
                self.people.remove(index);
                Some(id)
            }
            Action::Clear => {
                self.people.clear();
                None
            }
        };
        for subscriber in &mut self.subscribers {
            subscriber(&self.people);
        }
        Ok(touched)
    }

    /// Convert the reference date/time for everyone and lay out each timeline.
    pub fn compare(
        &self,
        source_timezone: &str,
        local_time: &str,
        local_date: &str,
        format: HourFormat,
        sun: SunWindow,
    ) -> Result<Vec<Comparison<'_>>> {
        self.people
            .iter()
            .map(|person| {
                let spec =
                    TimeSpec::parse(source_timezone, local_time, local_date, &person.timezone)?;
                let result = spec.convert(format == HourFormat::Military)?;
                let timeline = build_timeline(&CenteredTime::from_conversion(&result)?, format, sun)?;
                Ok(Comparison {
                    person,
                    result,
                    timeline,
                })
            })
            .collect()
    }

    fn person_mut(&mut self, id: u64) -> Result<&mut Person> {
        self.people
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(Error::UnknownPerson(id))
    }
}

fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Err(Error::EmptyName)
    } else {
        Ok(trimmed.to_owned())
    }
}

fn normalize_role(role: Option<String>) -> Option<String> {
    role.map(|r| r.trim().to_owned()).filter(|r| !r.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn add(board: &mut Board, name: &str, tz: &str) -> u64 {
        board
            .dispatch(Action::Add {
                name: name.into(),
                timezone: tz.into(),
                role: None,
            })
            .unwrap()
            .unwrap()
    }

    #[test]
    fn add_assigns_increasing_ids_and_trims() {
        let mut board = Board::new();
        let a = add(&mut board, "  Ada ", "Europe/London");
        let b = add(&mut board, "Grace", "America/New_York");
        assert!(b > a);
        assert_eq!(board.get(a).unwrap().name, "Ada");
        assert_eq!(board.people().len(), 2);
    }

    #[test]
    fn rejected_actions_change_nothing() {
        let mut board = Board::new();
        let seen = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&seen);
        board.subscribe(move |_| *counter.borrow_mut() += 1);

        assert_eq!(
            board.dispatch(Action::Add {
                name: "  ".into(),
                timezone: "Europe/London".into(),
                role: None
            }),
            Err(Error::EmptyName)
        );
        assert!(matches!(
            board.dispatch(Action::Add {
                name: "Linus".into(),
                timezone: "Europe/Helsinky".into(),
                role: None
            }),
            Err(Error::UnknownTimezone(_))
        ));
        assert_eq!(
            board.dispatch(Action::Remove { id: 9 }),
            Err(Error::UnknownPerson(9))
        );
        assert!(board.people().is_empty());
        assert_eq!(*seen.borrow(), 0);
    }

    #[test]
    fn subscribers_see_each_change() {
        let mut board = Board::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        board.subscribe(move |people| sink.borrow_mut().push(people.len()));

        let id = add(&mut board, "Ada", "Europe/London");
        add(&mut board, "Grace", "America/New_York");
        board
            .dispatch(Action::Rename {
                id,
                name: "Ada L.".into(),
            })
            .unwrap();
        board.dispatch(Action::Remove { id }).unwrap();
        board.dispatch(Action::Clear).unwrap();
        assert_eq!(*log.borrow(), vec![1, 2, 2, 1, 0]);
    }

    #[test]
    fn timezone_and_role_updates() {
        let mut board = Board::new();
        let id = add(&mut board, "Ada", "Europe/London");
        board
            .dispatch(Action::SetTimezone {
                id,
                timezone: "Asia/Tokyo".into(),
            })
            .unwrap();
        board
            .dispatch(Action::SetRole {
                id,
                role: Some(" Lead ".into()),
            })
            .unwrap();
        let person = board.get(id).unwrap();
        assert_eq!(person.timezone, "Asia/Tokyo");
        assert_eq!(person.role.as_deref(), Some("Lead"));
        board
            .dispatch(Action::SetRole {
                id,
                role: Some("".into()),
            })
            .unwrap();
        assert_eq!(board.get(id).unwrap().role, None);
    }

    #[test]
    fn restore_continues_ids() {
        let people = vec![Person {
            id: 41,
            name: "Ada".into(),
            timezone: "Europe/London".into(),
            role: None,
        }];
        let mut board = Board::from_people(people).unwrap();
        assert_eq!(add(&mut board, "Grace", "America/New_York"), 42);

        let bad = vec![Person {
            id: 0,
            name: "Ada".into(),
            timezone: "Atlantis/Capital".into(),
            role: None,
        }];
        assert!(Board::from_people(bad).is_err());
    }

    #[test]
    fn restore_rejects_duplicate_and_exhausted_ids() {
        let person = |id: u64, name: &str| Person {
            id,
            name: name.into(),
            timezone: "Europe/London".into(),
            role: None,
        };
        assert_eq!(
            Board::from_people(vec![person(1, "Ada"), person(1, "Grace")]).unwrap_err(),
            Error::DuplicatePerson(1)
        );
        assert_eq!(
            Board::from_people(vec![person(u64::MAX, "Ada")]).unwrap_err(),
            Error::IdsExhausted(u64::MAX)
        );

        let mut board = Board::from_people(vec![person(u64::MAX - 1, "Ada")]).unwrap();
        assert_eq!(
            board.dispatch(Action::Add {
                name: "Grace".into(),
                timezone: "America/New_York".into(),
                role: None,
            }),
            Err(Error::IdsExhausted(u64::MAX))
        );
        assert_eq!(board.people().len(), 1);
    }

    #[test]
    fn compare_converts_for_everyone() {
        let mut board = Board::new();
        add(&mut board, "Grace", "America/New_York");
        add(&mut board, "Hiro", "Asia/Tokyo");
        let rows = board
            .compare(
                "America/Los_Angeles",
                "2:30 PM",
                "December 25, 2023",
                HourFormat::Normal,
                SunWindow::default(),
            )
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].result.time, "5:30 PM");
        assert_eq!(rows[0].timeline.centered_cell().label, "5PM");
        assert_eq!(rows[1].result.date, "12-26-2023");
        assert_eq!(rows[1].timeline.centered_cell().label, "7AM");
    }
}
