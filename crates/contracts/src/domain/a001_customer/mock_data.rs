use super::aggregate::Customer;
use crate::domain::common::{ymd, ActivityStatus};

fn customer(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    address: &str,
    join_date: (i32, u32, u32),
    status: ActivityStatus,
) -> Customer {
    Customer {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        phone: phone.into(),
        address: address.into(),
        join_date: ymd(join_date.0, join_date.1, join_date.2),
        status,
    }
}

/// Стартовый набор клиентов
pub fn mock_customers() -> Vec<Customer> {
    use ActivityStatus::{Active, Inactive};

    vec![
        customer("CUST001", "Rahul Sharma", "rahul.sharma@example.com", "9876543210", "123 Main St, Delhi", (2023, 1, 15), Active),
        customer("CUST002", "Priya Patel", "priya.patel@example.com", "8765432109", "456 Park Ave, Mumbai", (2023, 2, 20), Active),
        customer("CUST003", "Amit Kumar", "amit.kumar@example.com", "7654321098", "789 Lake View, Bangalore", (2023, 3, 10), Inactive),
        customer("CUST004", "Sneha Gupta", "sneha.gupta@example.com", "6543210987", "234 Hill Road, Pune", (2023, 4, 5), Active),
        customer("CUST005", "Vikram Singh", "vikram.singh@example.com", "5432109876", "567 River Lane, Jaipur", (2023, 5, 12), Active),
        customer("CUST006", "Neha Verma", "neha.verma@example.com", "4321098765", "890 Mountain View, Chennai", (2023, 6, 18), Inactive),
        customer("CUST007", "Rajesh Khanna", "rajesh.khanna@example.com", "3210987654", "123 Valley Road, Hyderabad", (2023, 7, 22), Active),
        customer("CUST008", "Ananya Das", "ananya.das@example.com", "2109876543", "456 Ocean Drive, Kolkata", (2023, 8, 30), Active),
        customer("CUST009", "Suresh Reddy", "suresh.reddy@example.com", "1098765432", "789 Forest Path, Ahmedabad", (2023, 9, 14), Inactive),
        customer("CUST010", "Meera Joshi", "meera.joshi@example.com", "9087654321", "234 Sunset Blvd, Lucknow", (2023, 10, 25), Active),
    ]
}
