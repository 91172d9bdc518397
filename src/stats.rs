use crate::filters::DateFilter;
use crate::models::{Dataset, User};
use crate::tabs::{filter_orders, tabs_for, Tab};
use chrono::{Local, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Badge {
    pub tab: Tab,
    pub label: &'static str,
    pub count: usize,
}

pub fn build_badges(dataset: &Dataset, user: &User, filter: &DateFilter) -> Vec<Badge> {
    build_badges_at(Local::now().date_naive(), dataset, user, filter)
}

pub fn build_badges_at(
    today: NaiveDate,
    dataset: &Dataset,
    user: &User,
    filter: &DateFilter,
) -> Vec<Badge> {
    tabs_for(user.department)
        .iter()
        .map(|&tab| Badge {
            tab,
            label: tab.label(),
            count: filter_orders(&dataset.orders, tab, user, filter, today).len(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Department, Order, OrderStatus};

    #[test]
    fn badges_count_each_transport_tab() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
        let mut assigned = Order::new("B", "Okta", 900.0, OrderStatus::Loading);
        assigned.driver_name = Some("Goran".into());
        let dataset = Dataset {
            orders: vec![
                Order::new("A", "Okta", 500.0, OrderStatus::Approved),
                Order::new("C", "Okta", 500.0, OrderStatus::Approved),
                assigned,
            ],
            ..Dataset::default()
        };
        let user = User {
            id: "T1".into(),
            name: "Tina".into(),
            department: Department::Transport,
        };
        let badges = build_badges_at(today, &dataset, &user, &DateFilter::All);
        let counts: Vec<_> = badges.iter().map(|badge| (badge.tab, badge.count)).collect();
        assert_eq!(
            counts,
            vec![
                (Tab::ForAssigning, 2),
                (Tab::Assigned, 1),
                (Tab::TransportDisputed, 0),
                (Tab::TransportFinished, 0),
            ]
        );
    }

    #[test]
    fn badges_respect_date_filter() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
        let mut dated = Order::new("A", "Okta", 500.0, OrderStatus::PendingApproval);
        dated.order_date = Some(today);
        let dataset = Dataset {
            orders: vec![dated, Order::new("B", "Okta", 500.0, OrderStatus::PendingApproval)],
            ..Dataset::default()
        };
        let manager = User {
            id: "M1".into(),
            name: "Marija".into(),
            department: Department::Management,
        };
        let badges = build_badges_at(today, &dataset, &manager, &DateFilter::Today);
        assert_eq!(badges[0].tab, Tab::PendingApproval);
        assert_eq!(badges[0].count, 1);
    }
}
