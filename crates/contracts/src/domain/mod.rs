pub mod common;

pub mod a001_customer;
pub mod a002_delivery_boy;
pub mod a003_product;
pub mod a004_order;
pub mod a005_offer;
pub mod a006_subscription_plan;
pub mod a007_customer_subscription;
