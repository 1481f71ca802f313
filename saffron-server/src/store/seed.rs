//! Demo fixtures
//!
//! Static seed data loaded into the [`MemStore`] at startup. Fixed IDs so
//! demo clients and tests can reference entities directly.

use shared::models::*;

use super::MemStore;

pub(crate) fn populate(store: &MemStore) {
    for category in categories() {
        store.insert_category_raw(category);
    }
    for item in menu() {
        store.insert_menu_item_raw(item);
    }
    for item in inventory() {
        store.insert_inventory_raw(item);
    }
    for table in tables() {
        store.insert_table(table);
    }
    for reservation in reservations() {
        store.insert_reservation_raw(reservation);
    }
    for member in team() {
        store.insert_staff_raw(member);
    }
    for customer in customers() {
        store.insert_customer_raw(customer);
    }
}

fn categories() -> Vec<Category> {
    [("Starters", 0), ("Mains", 1), ("Desserts", 2), ("Drinks", 3)]
        .into_iter()
        .enumerate()
        .map(|(i, (name, sort_order))| Category {
            id: format!("category_{i}"),
            name: name.to_string(),
            sort_order,
            is_active: true,
        })
        .collect()
}

fn menu() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: "menu_bruschetta".into(),
            name: "Bruschetta".into(),
            price: 7.50,
            category: "Starters".into(),
            subcategory: None,
            addons: vec![Addon {
                id: "addon_burrata".into(),
                name: "Burrata".into(),
                price: 3.50,
            }],
            is_active: true,
        },
        MenuItem {
            id: "menu_calamari".into(),
            name: "Fried Calamari".into(),
            price: 9.00,
            category: "Starters".into(),
            subcategory: None,
            addons: vec![],
            is_active: true,
        },
        MenuItem {
            id: "menu_ribeye".into(),
            name: "Ribeye Steak".into(),
            price: 18.50,
            category: "Mains".into(),
            subcategory: Some("Grill".into()),
            addons: vec![
                Addon {
                    id: "addon_peppercorn".into(),
                    name: "Peppercorn Sauce".into(),
                    price: 4.00,
                },
                Addon {
                    id: "addon_fries".into(),
                    name: "Truffle Fries".into(),
                    price: 4.50,
                },
            ],
            is_active: true,
        },
        MenuItem {
            id: "menu_risotto".into(),
            name: "Mushroom Risotto".into(),
            price: 14.00,
            category: "Mains".into(),
            subcategory: None,
            addons: vec![Addon {
                id: "addon_parmesan".into(),
                name: "Extra Parmesan".into(),
                price: 1.50,
            }],
            is_active: true,
        },
        MenuItem {
            id: "menu_tiramisu".into(),
            name: "Tiramisu".into(),
            price: 6.50,
            category: "Desserts".into(),
            subcategory: None,
            addons: vec![],
            is_active: true,
        },
        MenuItem {
            id: "menu_house_red".into(),
            name: "House Red (175ml)".into(),
            price: 5.50,
            category: "Drinks".into(),
            subcategory: Some("Wine".into()),
            addons: vec![],
            is_active: true,
        },
    ]
}

fn inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem {
            id: "inv_ribeye".into(),
            name: "Ribeye (portion)".into(),
            stock: 12.0,
            unit: "portion".into(),
            low_threshold: 5.0,
        },
        InventoryItem {
            id: "inv_arborio".into(),
            name: "Arborio Rice".into(),
            stock: 6.0,
            unit: "kg".into(),
            low_threshold: 5.0,
        },
        InventoryItem {
            id: "inv_house_red".into(),
            name: "House Red".into(),
            stock: 2.0,
            unit: "bottle".into(),
            low_threshold: 5.0,
        },
        InventoryItem {
            id: "inv_mascarpone".into(),
            name: "Mascarpone".into(),
            stock: 4.0,
            unit: "kg".into(),
            low_threshold: 2.0,
        },
    ]
}

fn tables() -> Vec<DiningTable> {
    (1..=8)
        .map(|n| DiningTable {
            id: format!("table_{n}"),
            name: format!("Table {n}"),
            capacity: if n <= 4 { 2 } else { 4 },
            status: TableStatus::Free,
        })
        .collect()
}

fn reservations() -> Vec<Reservation> {
    vec![
        Reservation {
            id: "res_dunn".into(),
            customer_name: "Laura Dunn".into(),
            party_size: 4,
            time: "2026-09-01T19:00:00Z".into(),
            status: ReservationStatus::Confirmed,
            notes: Some("Window seat if possible".into()),
        },
        Reservation {
            id: "res_osei".into(),
            customer_name: "Kwame Osei".into(),
            party_size: 2,
            time: "2026-09-01T20:30:00Z".into(),
            status: ReservationStatus::Pending,
            notes: None,
        },
    ]
}

fn team() -> Vec<StaffMember> {
    vec![
        StaffMember {
            id: "staff_ines".into(),
            name: "Inês Costa".into(),
            role: Role::Admin,
            email: "ines@saffron.example".into(),
            status: StaffStatus::Active,
        },
        StaffMember {
            id: "staff_marco".into(),
            name: "Marco Bellini".into(),
            role: Role::Advanced,
            email: "marco@saffron.example".into(),
            status: StaffStatus::Active,
        },
        StaffMember {
            id: "staff_priya".into(),
            name: "Priya Nair".into(),
            role: Role::Basic,
            email: "priya@saffron.example".into(),
            status: StaffStatus::Active,
        },
    ]
}

fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "cust_dunn".into(),
            name: "Laura Dunn".into(),
            email: Some("laura.dunn@example.com".into()),
            phone: Some("+44 7700 900123".into()),
            visits: 14,
            notes: Some("Regular, prefers table 6".into()),
        },
        Customer {
            id: "cust_osei".into(),
            name: "Kwame Osei".into(),
            email: None,
            phone: Some("+44 7700 900456".into()),
            visits: 2,
            notes: None,
        },
    ]
}
