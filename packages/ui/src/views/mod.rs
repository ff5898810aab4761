mod view_equipments;
pub use view_equipments::ViewEquipments;
