//! Platform enumerations shared by the tools.

/// Order status labels and their platform status codes.
///
/// The platform arbitrates which transitions are legal; this is translation
/// only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Incomplete,
    Pending,
    Shipped,
    PartiallyShipped,
    Refunded,
    Cancelled,
    AwaitingPayment,
    AwaitingFulfillment,
    AwaitingShipment,
    AwaitingPickup,
    Completed,
    ManualVerificationRequired,
    Disputed,
    PartiallyRefunded,
}

impl OrderStatus {
    /// All human-readable labels, in status-code order.
    pub const LABELS: [&'static str; 14] = [
        "Incomplete",
        "Pending",
        "Shipped",
        "Partially Shipped",
        "Refunded",
        "Cancelled",
        "Awaiting Payment",
        "Awaiting Fulfillment",
        "Awaiting Shipment",
        "Awaiting Pickup",
        "Completed",
        "Manual Verification Required",
        "Disputed",
        "Partially Refunded",
    ];

    /// Look up a status by its human-readable label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Incomplete" => Some(Self::Incomplete),
            "Pending" => Some(Self::Pending),
            "Shipped" => Some(Self::Shipped),
            "Partially Shipped" => Some(Self::PartiallyShipped),
            "Refunded" => Some(Self::Refunded),
            "Cancelled" => Some(Self::Cancelled),
            "Awaiting Payment" => Some(Self::AwaitingPayment),
            "Awaiting Fulfillment" => Some(Self::AwaitingFulfillment),
            "Awaiting Shipment" => Some(Self::AwaitingShipment),
            "Awaiting Pickup" => Some(Self::AwaitingPickup),
            "Completed" => Some(Self::Completed),
            "Manual Verification Required" => Some(Self::ManualVerificationRequired),
            "Disputed" => Some(Self::Disputed),
            "Partially Refunded" => Some(Self::PartiallyRefunded),
            _ => None,
        }
    }

    /// The platform status code for this status.
    #[must_use]
    pub const fn status_id(self) -> u8 {
        match self {
            Self::Incomplete => 0,
            Self::Pending => 1,
            Self::Shipped => 2,
            Self::PartiallyShipped => 3,
            Self::Refunded => 4,
            Self::Cancelled => 5,
            Self::AwaitingPayment => 6,
            Self::AwaitingFulfillment => 7,
            Self::AwaitingShipment => 8,
            Self::AwaitingPickup => 9,
            Self::Completed => 10,
            Self::ManualVerificationRequired => 11,
            Self::Disputed => 12,
            Self::PartiallyRefunded => 13,
        }
    }

    /// The human-readable label for this status.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Incomplete => "Incomplete",
            Self::Pending => "Pending",
            Self::Shipped => "Shipped",
            Self::PartiallyShipped => "Partially Shipped",
            Self::Refunded => "Refunded",
            Self::Cancelled => "Cancelled",
            Self::AwaitingPayment => "Awaiting Payment",
            Self::AwaitingFulfillment => "Awaiting Fulfillment",
            Self::AwaitingShipment => "Awaiting Shipment",
            Self::AwaitingPickup => "Awaiting Pickup",
            Self::Completed => "Completed",
            Self::ManualVerificationRequired => "Manual Verification Required",
            Self::Disputed => "Disputed",
            Self::PartiallyRefunded => "Partially Refunded",
        }
    }
}

/// Valid product option display types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    RadioButtons,
    Rectangles,
    Dropdown,
    ProductList,
    ProductListWithImages,
    Swatch,
}

impl OptionType {
    /// All valid option type names.
    pub const NAMES: [&'static str; 6] = [
        "radio_buttons",
        "rectangles",
        "dropdown",
        "product_list",
        "product_list_with_images",
        "swatch",
    ];

    /// Look up an option type by its API name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "radio_buttons" => Some(Self::RadioButtons),
            "rectangles" => Some(Self::Rectangles),
            "dropdown" => Some(Self::Dropdown),
            "product_list" => Some(Self::ProductList),
            "product_list_with_images" => Some(Self::ProductListWithImages),
            "swatch" => Some(Self::Swatch),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_map_is_complete() {
        for (code, label) in OrderStatus::LABELS.iter().enumerate() {
            let status = OrderStatus::from_label(label).expect("known label");
            assert_eq!(u8::try_from(code).expect("fits"), status.status_id());
            assert_eq!(status.label(), *label);
        }
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(OrderStatus::from_label("Incomplete").map(OrderStatus::status_id), Some(0));
        assert_eq!(OrderStatus::from_label("Shipped").map(OrderStatus::status_id), Some(2));
        assert_eq!(OrderStatus::from_label("Awaiting Pickup").map(OrderStatus::status_id), Some(9));
        assert_eq!(
            OrderStatus::from_label("Partially Refunded").map(OrderStatus::status_id),
            Some(13)
        );
    }

    #[test]
    fn test_unknown_status_label() {
        assert!(OrderStatus::from_label("shipped").is_none());
        assert!(OrderStatus::from_label("On Hold").is_none());
    }

    #[test]
    fn test_option_type_names() {
        for name in OptionType::NAMES {
            assert!(OptionType::from_name(name).is_some());
        }
        assert!(OptionType::from_name("checkbox").is_none());
    }
}
