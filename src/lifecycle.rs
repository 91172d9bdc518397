//! Order status pipeline.
//!
//! Orders move forward only:
//! Pending Approval -> Approved -> Truck Assigned -> In Warehouse -> Loading
//! -> Left Warehouse -> Delivered, or Left Warehouse -> Disputed -> Resolved.
//! A pending order may also be Rejected. The dashboard checks a transition
//! against its loaded copy before submitting; the store stays authoritative.

use crate::models::OrderStatus;

impl OrderStatus {
    pub fn successors(self) -> &'static [OrderStatus] {
        use OrderStatus::*;
        match self {
            PendingApproval => &[Approved, Rejected],
            Approved => &[TruckAssigned],
            TruckAssigned => &[InWarehouse],
            InWarehouse => &[Loading],
            Loading => &[LeftWarehouse],
            LeftWarehouse => &[Delivered, Disputed],
            Disputed => &[Resolved],
            Rejected | Delivered | Resolved => &[],
        }
    }

    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        self.successors().contains(&next)
    }

    /// The next step a warehouse user can record, if any.
    pub fn next_warehouse_step(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::TruckAssigned => Some(OrderStatus::InWarehouse),
            OrderStatus::InWarehouse => Some(OrderStatus::Loading),
            OrderStatus::Loading => Some(OrderStatus::LeftWarehouse),
            _ => None,
        }
    }

    pub fn is_warehouse_step(self) -> bool {
        matches!(
            self,
            OrderStatus::InWarehouse | OrderStatus::Loading | OrderStatus::LeftWarehouse
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_is_allowed() {
        let path = [
            OrderStatus::PendingApproval,
            OrderStatus::Approved,
            OrderStatus::TruckAssigned,
            OrderStatus::InWarehouse,
            OrderStatus::Loading,
            OrderStatus::LeftWarehouse,
            OrderStatus::Delivered,
        ];
        for pair in path.windows(2) {
            assert!(pair[0].can_transition_to(pair[1]), "{} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn disputes_branch_from_left_warehouse() {
        assert!(OrderStatus::LeftWarehouse.can_transition_to(OrderStatus::Disputed));
        assert!(OrderStatus::Disputed.can_transition_to(OrderStatus::Resolved));
        assert!(!OrderStatus::Loading.can_transition_to(OrderStatus::Disputed));
        assert!(!OrderStatus::Delivered.can_transition_to(OrderStatus::Disputed));
    }

    #[test]
    fn no_skipping_or_going_back() {
        assert!(!OrderStatus::Approved.can_transition_to(OrderStatus::Loading));
        assert!(!OrderStatus::Loading.can_transition_to(OrderStatus::InWarehouse));
        assert!(!OrderStatus::Approved.can_transition_to(OrderStatus::PendingApproval));
    }

    #[test]
    fn terminal_states() {
        for status in [OrderStatus::Rejected, OrderStatus::Delivered, OrderStatus::Resolved] {
            assert!(status.successors().is_empty(), "{status}");
        }
        assert_eq!(OrderStatus::Disputed.successors(), &[OrderStatus::Resolved]);
    }

    #[test]
    fn warehouse_steps_follow_the_pipeline() {
        assert_eq!(
            OrderStatus::TruckAssigned.next_warehouse_step(),
            Some(OrderStatus::InWarehouse)
        );
        assert_eq!(
            OrderStatus::Loading.next_warehouse_step(),
            Some(OrderStatus::LeftWarehouse)
        );
        assert_eq!(OrderStatus::LeftWarehouse.next_warehouse_step(), None);
        for status in OrderStatus::ALL {
            if let Some(next) = status.next_warehouse_step() {
                assert!(status.can_transition_to(next));
                assert!(next.is_warehouse_step());
            }
        }
    }
}
