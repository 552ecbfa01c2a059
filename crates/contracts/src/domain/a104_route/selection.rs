use super::aggregate::StaffRoute;

/// Which route's stop list the Routes view shows.
///
/// At most one route is selected at a time. An id that matches no route is
/// a valid state; [`RouteSelection::active`] then yields nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteSelection {
    selected: Option<String>,
}

impl RouteSelection {
    /// Selects the first route, or nothing for an empty list.
    pub fn first_of(routes: &[StaffRoute]) -> Self {
        Self {
            selected: routes.first().map(|r| r.id.clone()),
        }
    }

    pub fn select(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    pub fn active<'a>(&self, routes: &'a [StaffRoute]) -> Option<&'a StaffRoute> {
        let id = self.selected.as_deref()?;
        routes.iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a104_route::aggregate::StopStatus;
    use crate::domain::a104_route::seed::routes;

    #[test]
    fn test_defaults_to_first_route() {
        let selection = RouteSelection::first_of(routes());
        assert!(selection.is_selected("1"));

        let active = selection.active(routes()).unwrap();
        let statuses: Vec<StopStatus> = active.stops.iter().map(|s| s.status).collect();
        assert_eq!(
            statuses,
            vec![
                StopStatus::Completed,
                StopStatus::Completed,
                StopStatus::Current,
                StopStatus::Pending,
            ]
        );
        let ids: Vec<&str> = active.stops.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1-1", "1-2", "1-3", "1-4"]);
    }

    #[test]
    fn test_select_replaces_previous() {
        let mut selection = RouteSelection::first_of(routes());
        selection.select("3");
        assert!(selection.is_selected("3"));
        assert!(!selection.is_selected("1"));
        assert_eq!(selection.active(routes()).unwrap().staff_name, "Yamamoto Ken");
    }

    #[test]
    fn test_unknown_id_has_no_active_route() {
        let mut selection = RouteSelection::first_of(routes());
        selection.select("42");
        assert!(selection.active(routes()).is_none());
    }

    #[test]
    fn test_empty_list() {
        let selection = RouteSelection::first_of(&[]);
        assert_eq!(selection, RouteSelection::default());
        assert!(selection.active(routes()).is_none());
    }

    #[test]
    fn test_select_keeps_authored_stop_order() {
        let mut selection = RouteSelection::first_of(routes());
        selection.select("2");
        let names: Vec<&str> = selection
            .active(routes())
            .map(|r| r.stops.iter().map(|s| s.store_name.as_str()).collect())
            .unwrap_or_default();
        assert_eq!(
            names,
            vec!["Gourmet Market Ginza", "Specialty Foods Daikanyama", "Itoya Stationery"]
        );
    }
}
