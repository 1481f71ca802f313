//! 内存数据存储
//!
//! Domain data is fixture-backed and lives in process memory: there is no
//! database for menu, orders, inventory, reservations, tables, team or
//! customers. DashMap keeps per-entity maps safe for the concurrent axum
//! handlers. Only connection settings persist (see [`crate::settings`]).

mod seed;

use dashmap::DashMap;
use shared::models::*;
use uuid::Uuid;

/// Generate a prefixed entity ID
pub fn new_id(prefix: &str) -> String {
    format!("{prefix}_{}", Uuid::new_v4().simple())
}

/// In-memory fixture store
///
/// One map per entity type, keyed by String ID. All mutation goes through
/// explicit methods; nothing here is module-level mutable state.
#[derive(Debug, Default)]
pub struct MemStore {
    menu: DashMap<String, MenuItem>,
    categories: DashMap<String, Category>,
    orders: DashMap<String, Order>,
    inventory: DashMap<String, InventoryItem>,
    reservations: DashMap<String, Reservation>,
    tables: DashMap<String, DiningTable>,
    team: DashMap<String, StaffMember>,
    customers: DashMap<String, Customer>,
}

impl MemStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store populated with the demo fixtures
    pub fn seeded() -> Self {
        let store = Self::new();
        seed::populate(&store);
        store
    }

    // ==================== Menu ====================

    pub fn list_menu(&self) -> Vec<MenuItem> {
        let mut items: Vec<_> = self.menu.iter().map(|e| e.value().clone()).collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    pub fn list_menu_by_category(&self, category: &str) -> Vec<MenuItem> {
        let mut items: Vec<_> = self
            .menu
            .iter()
            .filter(|e| e.value().category == category)
            .map(|e| e.value().clone())
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    pub fn get_menu_item(&self, id: &str) -> Option<MenuItem> {
        self.menu.get(id).map(|e| e.value().clone())
    }

    pub fn insert_menu_item(&self, payload: MenuItemCreate) -> MenuItem {
        let item = MenuItem {
            id: new_id("menu"),
            name: payload.name,
            price: payload.price,
            category: payload.category,
            subcategory: payload.subcategory,
            addons: payload.addons,
            is_active: true,
        };
        self.menu.insert(item.id.clone(), item.clone());
        item
    }

    pub fn update_menu_item(&self, id: &str, update: MenuItemUpdate) -> Option<MenuItem> {
        let mut entry = self.menu.get_mut(id)?;
        let item = entry.value_mut();
        if let Some(name) = update.name {
            item.name = name;
        }
        if let Some(price) = update.price {
            item.price = price;
        }
        if let Some(category) = update.category {
            item.category = category;
        }
        if let Some(subcategory) = update.subcategory {
            item.subcategory = Some(subcategory);
        }
        if let Some(addons) = update.addons {
            item.addons = addons;
        }
        if let Some(is_active) = update.is_active {
            item.is_active = is_active;
        }
        Some(item.clone())
    }

    pub fn remove_menu_item(&self, id: &str) -> Option<MenuItem> {
        self.menu.remove(id).map(|(_, v)| v)
    }

    // ==================== Categories ====================

    pub fn list_categories(&self) -> Vec<Category> {
        let mut items: Vec<_> = self.categories.iter().map(|e| e.value().clone()).collect();
        items.sort_by_key(|c| c.sort_order);
        items
    }

    pub fn insert_category(&self, payload: CategoryCreate) -> Category {
        let category = Category {
            id: new_id("category"),
            name: payload.name,
            sort_order: payload.sort_order.unwrap_or(0),
            is_active: true,
        };
        self.categories
            .insert(category.id.clone(), category.clone());
        category
    }

    // ==================== Orders ====================

    pub fn list_orders(&self) -> Vec<Order> {
        let mut orders: Vec<_> = self.orders.iter().map(|e| e.value().clone()).collect();
        // Newest first
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        orders
    }

    pub fn get_order(&self, id: &str) -> Option<Order> {
        self.orders.get(id).map(|e| e.value().clone())
    }

    pub fn insert_order(&self, order: Order) -> Order {
        self.orders.insert(order.id.clone(), order.clone());
        order
    }

    pub fn replace_order(&self, order: Order) -> Option<Order> {
        if !self.orders.contains_key(&order.id) {
            return None;
        }
        self.orders.insert(order.id.clone(), order.clone());
        Some(order)
    }

    pub fn remove_order(&self, id: &str) -> Option<Order> {
        self.orders.remove(id).map(|(_, v)| v)
    }

    // ==================== Inventory ====================

    pub fn list_inventory(&self) -> Vec<InventoryItem> {
        let mut items: Vec<_> = self.inventory.iter().map(|e| e.value().clone()).collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    pub fn get_inventory_item(&self, id: &str) -> Option<InventoryItem> {
        self.inventory.get(id).map(|e| e.value().clone())
    }

    pub fn insert_inventory_item(&self, payload: InventoryItemCreate) -> InventoryItem {
        let item = InventoryItem {
            id: new_id("inv"),
            name: payload.name,
            stock: payload.stock,
            unit: payload.unit,
            low_threshold: payload.low_threshold,
        };
        self.inventory.insert(item.id.clone(), item.clone());
        item
    }

    pub fn update_inventory_item(
        &self,
        id: &str,
        update: InventoryItemUpdate,
    ) -> Option<InventoryItem> {
        let mut entry = self.inventory.get_mut(id)?;
        let item = entry.value_mut();
        if let Some(name) = update.name {
            item.name = name;
        }
        if let Some(stock) = update.stock {
            item.stock = stock;
        }
        if let Some(unit) = update.unit {
            item.unit = unit;
        }
        if let Some(low_threshold) = update.low_threshold {
            item.low_threshold = low_threshold;
        }
        Some(item.clone())
    }

    pub fn remove_inventory_item(&self, id: &str) -> Option<InventoryItem> {
        self.inventory.remove(id).map(|(_, v)| v)
    }

    // ==================== Reservations ====================

    pub fn list_reservations(&self) -> Vec<Reservation> {
        let mut items: Vec<_> = self
            .reservations
            .iter()
            .map(|e| e.value().clone())
            .collect();
        items.sort_by(|a, b| a.time.cmp(&b.time));
        items
    }

    pub fn get_reservation(&self, id: &str) -> Option<Reservation> {
        self.reservations.get(id).map(|e| e.value().clone())
    }

    pub fn insert_reservation(&self, payload: ReservationCreate) -> Reservation {
        let reservation = Reservation {
            id: new_id("res"),
            customer_name: payload.customer_name,
            party_size: payload.party_size,
            time: payload.time,
            status: ReservationStatus::Pending,
            notes: payload.notes,
        };
        self.reservations
            .insert(reservation.id.clone(), reservation.clone());
        reservation
    }

    pub fn update_reservation(&self, id: &str, update: ReservationUpdate) -> Option<Reservation> {
        let mut entry = self.reservations.get_mut(id)?;
        let reservation = entry.value_mut();
        if let Some(customer_name) = update.customer_name {
            reservation.customer_name = customer_name;
        }
        if let Some(party_size) = update.party_size {
            reservation.party_size = party_size;
        }
        if let Some(time) = update.time {
            reservation.time = time;
        }
        if let Some(status) = update.status {
            reservation.status = status;
        }
        if let Some(notes) = update.notes {
            reservation.notes = Some(notes);
        }
        Some(reservation.clone())
    }

    pub fn remove_reservation(&self, id: &str) -> Option<Reservation> {
        self.reservations.remove(id).map(|(_, v)| v)
    }

    // ==================== Tables ====================

    pub fn list_tables(&self) -> Vec<DiningTable> {
        let mut tables: Vec<_> = self.tables.iter().map(|e| e.value().clone()).collect();
        tables.sort_by(|a, b| a.name.cmp(&b.name));
        tables
    }

    pub fn get_table(&self, id: &str) -> Option<DiningTable> {
        self.tables.get(id).map(|e| e.value().clone())
    }

    pub fn update_table(&self, id: &str, update: DiningTableUpdate) -> Option<DiningTable> {
        let mut entry = self.tables.get_mut(id)?;
        let table = entry.value_mut();
        if let Some(name) = update.name {
            table.name = name;
        }
        if let Some(capacity) = update.capacity {
            table.capacity = capacity;
        }
        if let Some(status) = update.status {
            table.status = status;
        }
        Some(table.clone())
    }

    pub(crate) fn insert_table(&self, table: DiningTable) {
        self.tables.insert(table.id.clone(), table);
    }

    // ==================== Team ====================

    pub fn list_team(&self) -> Vec<StaffMember> {
        let mut members: Vec<_> = self.team.iter().map(|e| e.value().clone()).collect();
        members.sort_by(|a, b| a.name.cmp(&b.name));
        members
    }

    pub fn get_staff_member(&self, id: &str) -> Option<StaffMember> {
        self.team.get(id).map(|e| e.value().clone())
    }

    pub fn insert_staff_member(&self, payload: StaffMemberCreate) -> StaffMember {
        let member = StaffMember {
            id: new_id("staff"),
            name: payload.name,
            role: payload.role,
            email: payload.email,
            status: StaffStatus::Active,
        };
        self.team.insert(member.id.clone(), member.clone());
        member
    }

    pub fn update_staff_member(&self, id: &str, update: StaffMemberUpdate) -> Option<StaffMember> {
        let mut entry = self.team.get_mut(id)?;
        let member = entry.value_mut();
        if let Some(name) = update.name {
            member.name = name;
        }
        if let Some(role) = update.role {
            member.role = role;
        }
        if let Some(email) = update.email {
            member.email = email;
        }
        if let Some(status) = update.status {
            member.status = status;
        }
        Some(member.clone())
    }

    pub fn remove_staff_member(&self, id: &str) -> Option<StaffMember> {
        self.team.remove(id).map(|(_, v)| v)
    }

    // ==================== Customers ====================

    pub fn list_customers(&self) -> Vec<Customer> {
        let mut customers: Vec<_> = self.customers.iter().map(|e| e.value().clone()).collect();
        customers.sort_by(|a, b| a.name.cmp(&b.name));
        customers
    }

    pub fn get_customer(&self, id: &str) -> Option<Customer> {
        self.customers.get(id).map(|e| e.value().clone())
    }

    pub fn insert_customer(&self, payload: CustomerCreate) -> Customer {
        let customer = Customer {
            id: new_id("cust"),
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            visits: 0,
            notes: payload.notes,
        };
        self.customers.insert(customer.id.clone(), customer.clone());
        customer
    }

    pub fn update_customer(&self, id: &str, update: CustomerUpdate) -> Option<Customer> {
        let mut entry = self.customers.get_mut(id)?;
        let customer = entry.value_mut();
        if let Some(name) = update.name {
            customer.name = name;
        }
        if let Some(email) = update.email {
            customer.email = Some(email);
        }
        if let Some(phone) = update.phone {
            customer.phone = Some(phone);
        }
        if let Some(visits) = update.visits {
            customer.visits = visits;
        }
        if let Some(notes) = update.notes {
            customer.notes = Some(notes);
        }
        Some(customer.clone())
    }

    pub fn remove_customer(&self, id: &str) -> Option<Customer> {
        self.customers.remove(id).map(|(_, v)| v)
    }

    // Seed helpers, used only by the fixture loader
    pub(crate) fn insert_menu_item_raw(&self, item: MenuItem) {
        self.menu.insert(item.id.clone(), item);
    }

    pub(crate) fn insert_inventory_raw(&self, item: InventoryItem) {
        self.inventory.insert(item.id.clone(), item);
    }

    pub(crate) fn insert_reservation_raw(&self, reservation: Reservation) {
        self.reservations.insert(reservation.id.clone(), reservation);
    }

    pub(crate) fn insert_staff_raw(&self, member: StaffMember) {
        self.team.insert(member.id.clone(), member);
    }

    pub(crate) fn insert_customer_raw(&self, customer: Customer) {
        self.customers.insert(customer.id.clone(), customer);
    }

    pub(crate) fn insert_category_raw(&self, category: Category) {
        self.categories.insert(category.id.clone(), category);
    }
}
