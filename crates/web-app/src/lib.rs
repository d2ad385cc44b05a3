#![warn(clippy::pedantic)]

pub mod log;

use std::slice::Iter;

use trh_domain as domain;

/// The four top-level views a registered user may select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Library,
    Exercises,
    Profile,
}

impl Tab {
    pub fn iter() -> Iter<'static, Tab> {
        static TABS: [Tab; 4] = [Tab::Home, Tab::Library, Tab::Exercises, Tab::Profile];
        TABS.iter()
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Tab::Home => "Inicio",
            Tab::Library => "Biblioteca",
            Tab::Exercises => "Ejercicios",
            Tab::Profile => "Perfil",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Unregistered,
    Registered(domain::UserProfile),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    TabSelected(Tab),
    SearchChanged(String),
    SearchCleared,
    CategorySelected(Option<domain::Category>),
    RegistrationSubmitted {
        name: String,
        height: String,
        weight: String,
        age: String,
    },
    LoggedOut,
}

/// The entire UI state. Every user interaction is an [`Event`] applied by
/// the pure transition function [`ViewState::handle`], one event at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub session: Session,
    pub active_tab: Tab,
    pub search_query: String,
    pub active_category: Option<domain::Category>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            session: Session::Unregistered,
            active_tab: Tab::Library,
            search_query: String::new(),
            active_category: None,
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn handle(mut self, event: Event) -> Self {
        match event {
            Event::TabSelected(tab) => {
                // No tab navigation exists before registration.
                if self.is_registered() {
                    self.active_tab = tab;
                }
            }
            Event::SearchChanged(query) => self.search_query = query,
            Event::SearchCleared => self.search_query.clear(),
            Event::CategorySelected(category) => self.active_category = category,
            Event::RegistrationSubmitted {
                name,
                height,
                weight,
                age,
            } => match domain::UserProfile::new(&name, &height, &weight, &age) {
                Ok(profile) => {
                    self.session = Session::Registered(profile);
                    self.active_tab = Tab::Home;
                }
                Err(err) => ::log::warn!("registration rejected: {err}"),
            },
            Event::LoggedOut => self.session = Session::Unregistered,
        }
        self
    }

    #[must_use]
    pub fn is_registered(&self) -> bool {
        matches!(self.session, Session::Registered(_))
    }

    #[must_use]
    pub fn profile(&self) -> Option<&domain::UserProfile> {
        match &self.session {
            Session::Unregistered => None,
            Session::Registered(profile) => Some(profile),
        }
    }

    /// The catalog selection determined by the current search query and
    /// category.
    #[must_use]
    pub fn filter(&self) -> domain::ExerciseFilter {
        domain::ExerciseFilter {
            query: self.search_query.clone(),
            category: self.active_category,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn registration(name: &str, height: &str, weight: &str, age: &str) -> Event {
        Event::RegistrationSubmitted {
            name: name.to_string(),
            height: height.to_string(),
            weight: weight.to_string(),
            age: age.to_string(),
        }
    }

    fn registered() -> ViewState {
        ViewState::default().handle(registration("Ana García", "170", "65", "28"))
    }

    #[test]
    fn test_tab_name() {
        let mut names = HashSet::new();

        for tab in Tab::iter() {
            let name = tab.name();

            assert!(!name.is_empty());
            assert!(!names.contains(name));

            names.insert(name);
        }
    }

    #[test]
    fn test_initial_state() {
        let state = ViewState::default();

        assert!(!state.is_registered());
        assert_eq!(state.profile(), None);
        assert_eq!(state.active_tab, Tab::Library);
        assert_eq!(state.search_query, "");
        assert_eq!(state.active_category, None);
    }

    #[test]
    fn test_registration() {
        let state = registered();

        assert!(state.is_registered());
        assert_eq!(state.active_tab, Tab::Home);
        assert_eq!(
            state.profile(),
            Some(&trh_domain::UserProfile {
                name: "Ana García".to_string(),
                height: "170".to_string(),
                weight: "65".to_string(),
                age: "28".to_string(),
            })
        );
    }

    #[rstest]
    #[case::empty_name("", "170", "65", "28")]
    #[case::empty_height("Ana García", "", "65", "28")]
    #[case::empty_weight("Ana García", "170", "", "28")]
    #[case::empty_age("Ana García", "170", "65", "")]
    #[case::all_empty("", "", "", "")]
    fn test_registration_rejected(
        #[case] name: &str,
        #[case] height: &str,
        #[case] weight: &str,
        #[case] age: &str,
    ) {
        let state = ViewState::default().handle(registration(name, height, weight, age));

        assert_eq!(state, ViewState::default());
    }

    #[test]
    fn test_logout_discards_profile() {
        let state = registered().handle(Event::LoggedOut);

        assert!(!state.is_registered());
        assert_eq!(state.profile(), None);

        let state = state.handle(registration("Ana García", "", "", ""));

        assert!(!state.is_registered());
    }

    #[test]
    fn test_tab_selection() {
        let state = registered().handle(Event::TabSelected(Tab::Profile));

        assert_eq!(state.active_tab, Tab::Profile);
    }

    #[test]
    fn test_tab_selection_ignored_while_unregistered() {
        let state = ViewState::default().handle(Event::TabSelected(Tab::Profile));

        assert_eq!(state.active_tab, Tab::Library);
    }

    #[test]
    fn test_search_persists_across_tabs() {
        let state = registered()
            .handle(Event::TabSelected(Tab::Library))
            .handle(Event::SearchChanged("Hestia".to_string()))
            .handle(Event::TabSelected(Tab::Profile))
            .handle(Event::TabSelected(Tab::Library));

        assert_eq!(state.search_query, "Hestia");
        assert_eq!(
            state
                .filter()
                .exercises()
                .iter()
                .map(|e| e.name)
                .collect::<Vec<_>>(),
            vec!["Hestia"]
        );
    }

    #[test]
    fn test_clear_search() {
        let state = registered()
            .handle(Event::SearchChanged("Hestia".to_string()))
            .handle(Event::SearchCleared);

        assert_eq!(state.search_query, "");
    }

    #[test]
    fn test_category_selection() {
        let category = Some(trh_domain::Category::Kneeling);
        let state = registered().handle(Event::CategorySelected(category));

        assert_eq!(state.active_category, category);
        assert_eq!(state.filter().category, category);

        let state = state.handle(Event::CategorySelected(None));

        assert_eq!(state.active_category, None);
    }

    #[test]
    fn test_filter_combines_search_and_category() {
        let state = registered()
            .handle(Event::SearchChanged("pélvico".to_string()))
            .handle(Event::CategorySelected(Some(trh_domain::Category::Standing)));

        assert!(state.filter().exercises().is_empty());
    }
}
