use super::aggregate::{DeliveryBoy, VehicleType};
use crate::domain::common::{ymd, ActivityStatus};

struct Seed {
    id: &'static str,
    name: &'static str,
    phone: &'static str,
    email: &'static str,
    address: &'static str,
    join_date: (i32, u32, u32),
    status: ActivityStatus,
    route: &'static str,
    vehicle_type: VehicleType,
    vehicle_number: &'static str,
}

impl From<Seed> for DeliveryBoy {
    fn from(s: Seed) -> Self {
        Self {
            id: s.id.into(),
            name: s.name.into(),
            phone: s.phone.into(),
            email: s.email.into(),
            address: s.address.into(),
            join_date: ymd(s.join_date.0, s.join_date.1, s.join_date.2),
            status: s.status,
            route: s.route.into(),
            vehicle_type: s.vehicle_type,
            vehicle_number: s.vehicle_number.into(),
        }
    }
}

/// Стартовый набор курьеров
pub fn mock_delivery_boys() -> Vec<DeliveryBoy> {
    use ActivityStatus::{Active, Inactive};
    use VehicleType::{Bicycle, Motorcycle, Scooter};

    let seeds = vec![
        Seed { id: "DEL001", name: "Sanjay Yadav", phone: "9876543210", email: "sanjay.yadav@example.com", address: "123 Worker Colony, Delhi", join_date: (2023, 1, 10), status: Active, route: "North Delhi", vehicle_type: Motorcycle, vehicle_number: "DL-5S-AB-1234" },
        Seed { id: "DEL002", name: "Manoj Kumar", phone: "8765432109", email: "manoj.kumar@example.com", address: "456 Sector 18, Noida", join_date: (2023, 2, 15), status: Active, route: "Noida Sector 18-30", vehicle_type: Scooter, vehicle_number: "UP-16-CD-5678" },
        Seed { id: "DEL003", name: "Ravi Sharma", phone: "7654321098", email: "ravi.sharma@example.com", address: "789 MG Road, Gurgaon", join_date: (2023, 3, 5), status: Inactive, route: "Gurgaon Central", vehicle_type: Bicycle, vehicle_number: "N/A" },
        Seed { id: "DEL004", name: "Prakash Verma", phone: "6543210987", email: "prakash.verma@example.com", address: "234 Rohini, Delhi", join_date: (2023, 4, 20), status: Active, route: "Rohini", vehicle_type: Motorcycle, vehicle_number: "DL-7S-EF-9012" },
        Seed { id: "DEL005", name: "Sunil Gupta", phone: "5432109876", email: "sunil.gupta@example.com", address: "567 Dwarka, Delhi", join_date: (2023, 5, 12), status: Active, route: "Dwarka", vehicle_type: Motorcycle, vehicle_number: "DL-8S-GH-3456" },
        Seed { id: "DEL006", name: "Anil Patel", phone: "4321098765", email: "anil.patel@example.com", address: "890 Indirapuram, Ghaziabad", join_date: (2023, 6, 25), status: Inactive, route: "Indirapuram", vehicle_type: Scooter, vehicle_number: "UP-14-IJ-7890" },
        Seed { id: "DEL007", name: "Vijay Singh", phone: "3210987654", email: "vijay.singh@example.com", address: "123 Vaishali, Ghaziabad", join_date: (2023, 7, 18), status: Active, route: "Vaishali", vehicle_type: Motorcycle, vehicle_number: "UP-14-KL-1234" },
        Seed { id: "DEL008", name: "Deepak Mishra", phone: "2109876543", email: "deepak.mishra@example.com", address: "456 Greater Noida", join_date: (2023, 8, 30), status: Active, route: "Greater Noida West", vehicle_type: Motorcycle, vehicle_number: "UP-16-MN-5678" },
    ];

    seeds.into_iter().map(DeliveryBoy::from).collect()
}
