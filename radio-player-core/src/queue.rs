use crate::station::Station;

/// The station catalog with a single movable cursor
///
/// The cursor is `None` when nothing is selected. A stored cursor is always a
/// valid index into the catalog.
#[derive(Debug, Clone, Default)]
pub struct StationQueue {
    stations: Vec<Station>,
    current_index: Option<usize>,
}

impl StationQueue {
    pub fn new(stations: Vec<Station>) -> Self {
        Self {
            stations,
            current_index: None,
        }
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Check if the index is within the catalog range
    pub fn is_index_valid(&self, index: usize) -> bool {
        index < self.len()
    }

    /// Get station by index
    pub fn get(&self, index: usize) -> Option<&Station> {
        self.stations.get(index)
    }

    /// Get current station
    pub fn current(&self) -> Option<&Station> {
        self.current_index.and_then(|i| self.stations.get(i))
    }

    /// Move the cursor to `index`. Returns false and leaves the cursor untouched if it is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if !self.is_index_valid(index) {
            return false;
        }
        self.current_index = Some(index);
        true
    }

    /// Clear the selection
    pub fn reset(&mut self) {
        self.current_index = None;
    }

    /// Advance the cursor, wrapping to the first station after the last.
    /// Without a selection the cursor moves to the first station.
    pub fn next(&mut self) {
        if self.is_empty() {
            return;
        }
        self.current_index = Some(match self.current_index {
            Some(current) => (current + 1) % self.len(),
            None => 0,
        });
    }

    /// Move the cursor back, wrapping to the last station before the first.
    /// Without a selection the cursor moves to the first station.
    pub fn prev(&mut self) {
        if self.is_empty() {
            return;
        }
        self.current_index = Some(match self.current_index {
            Some(0) => self.len() - 1,
            Some(current) => current - 1,
            None => 0,
        });
    }

    /// Index of the first station whose id starts with `prefix`
    pub fn position_by_id_prefix(&self, prefix: &str) -> Option<usize> {
        self.stations.iter().position(|station| station.id.starts_with(prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue_of(n: usize) -> StationQueue {
        let stations = (0..n)
            .map(|i| Station::new(format!("station{i}"), format!("Station {i}"), format!("http://s/{i}")))
            .collect();
        StationQueue::new(stations)
    }

    #[test]
    fn starts_without_selection() {
        let queue = queue_of(3);
        assert_eq!(queue.current_index(), None);
        assert!(queue.current().is_none());
    }

    #[test]
    fn index_validity_follows_catalog_bounds() {
        let queue = queue_of(20);
        assert!(queue.is_index_valid(0));
        assert!(queue.is_index_valid(5));
        assert!(queue.is_index_valid(19));
        assert!(!queue.is_index_valid(20));
        assert!(queue.get(20).is_none());
    }

    #[test]
    fn next_cycles_through_every_station() {
        let mut queue = queue_of(4);
        let visited: Vec<_> = (0..9)
            .map(|_| {
                queue.next();
                queue.current_index().unwrap()
            })
            .collect();
        assert_eq!(visited, vec![0, 1, 2, 3, 0, 1, 2, 3, 0]);
    }

    #[test]
    fn prev_cycles_in_reverse() {
        let mut queue = queue_of(4);
        let visited: Vec<_> = (0..6)
            .map(|_| {
                queue.prev();
                queue.current_index().unwrap()
            })
            .collect();
        assert_eq!(visited, vec![0, 3, 2, 1, 0, 3]);
    }

    #[test]
    fn navigation_scenario_on_twenty_stations() {
        let mut queue = queue_of(20);
        queue.next();
        queue.next();
        assert_eq!(queue.current_index(), Some(1));
        queue.prev();
        assert_eq!(queue.current_index(), Some(0));
        queue.prev();
        assert_eq!(queue.current_index(), Some(19));
    }

    #[test]
    fn select_rejects_out_of_range_index() {
        let mut queue = queue_of(3);
        assert!(queue.select(2));
        assert!(!queue.select(3));
        assert_eq!(queue.current_index(), Some(2));
    }

    #[test]
    fn reset_clears_selection() {
        let mut queue = queue_of(3);
        queue.select(1);
        queue.reset();
        assert_eq!(queue.current_index(), None);
    }

    #[test]
    fn navigation_on_empty_catalog_keeps_no_selection() {
        let mut queue = queue_of(0);
        queue.next();
        queue.prev();
        assert_eq!(queue.current_index(), None);
    }

    #[test]
    fn prefix_lookup_returns_first_match() {
        let mut stations: Vec<_> = (0..5).map(|i| Station::new(format!("x{i}"), "", "")).collect();
        stations[2].id = "rmc".into();
        stations[4].id = "rmcsport".into();
        let queue = StationQueue::new(stations);
        assert_eq!(queue.position_by_id_prefix("rmc"), Some(2));
        assert_eq!(queue.position_by_id_prefix("rmcs"), Some(4));
        assert_eq!(queue.position_by_id_prefix("nrj"), None);
    }
}
