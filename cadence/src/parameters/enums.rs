/// A fixed set of options a host can list, index and label, e.g. to build selector controls.
///
/// Usually implemented with `#[derive(Enum)]`.
pub trait Enum: Clone + Copy + Default + Send + Sync + 'static {
    const COUNT: usize;

    fn from_index(index: usize) -> Option<Self>;
    fn from_name(name: &str) -> Option<Self>;
    fn index(&self) -> usize;
    fn name(&self) -> &'static str;

    fn variants() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).filter_map(Self::from_index)
    }
}
