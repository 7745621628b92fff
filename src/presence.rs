#[derive(Clone)]
pub enum Presence<T> {
    Absent,
    Present(T),
}

impl<T> Presence<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Presence::Present(_))
    }
}
