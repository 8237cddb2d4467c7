/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Ursprung der Zeigerfläche im Koordinatenraum der Entities
    pub origin: glam::Vec2,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            origin: glam::Vec2::ZERO,
        }
    }

    /// Rechnet eine Zeigerposition in Weltkoordinaten um.
    #[inline]
    pub fn to_world(&self, pointer_pos: glam::Vec2) -> glam::Vec2 {
        pointer_pos + self.origin
    }
}
