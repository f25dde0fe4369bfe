use anyhow::Result;
use radio_player_core::Player;
use ratatui::{Frame, crossterm::event::KeyCode, layout::Rect};

use crate::state::AppState;

/// Trait that all routes must implement
pub trait RouteHandler: std::fmt::Debug {
    /// Render this route's UI
    fn render(&self, frame: &mut Frame, area: Rect, state: &AppState);

    /// Handle keyboard input for this route
    /// Returns Ok(RouteAction) to indicate what should happen next
    fn handle_input(
        &mut self,
        key: KeyCode,
        state: &mut AppState,
        player: &mut Player,
    ) -> Result<RouteAction>;

    /// Get the display name for the title bar
    fn name(&self) -> &str;

    fn help_items(&self) -> Vec<(&str, &str)> {
        vec![("Ctrl+C", "Quit")]
    }
}

/// Actions that can be returned from route handlers
#[derive(Debug)]
pub enum RouteAction {
    /// Do nothing, stay on current route
    None,
    /// Go back to previous route
    Pop,
    /// Navigate to a new route
    Push(Box<dyn RouteHandler>),
    /// Quit the application
    Quit,
}

/// Router manages the navigation stack
#[derive(Debug)]
pub struct Router {
    /// Stack of route handlers, last element is current route
    stack: Vec<Box<dyn RouteHandler>>,
}

impl Router {
    pub fn new(initial_route: Box<dyn RouteHandler>) -> Self {
        Self {
            stack: vec![initial_route],
        }
    }

    /// Get current route (top of stack)
    pub fn current(&self) -> &dyn RouteHandler {
        self.stack
            .last()
            .expect("Stack should never be empty")
            .as_ref()
    }

    /// Get mutable reference to current route
    pub fn current_mut(&mut self) -> &mut Box<dyn RouteHandler> {
        self.stack.last_mut().expect("Stack should never be empty")
    }

    /// Execute a route action, returns true when the shell should quit
    pub fn execute_action(&mut self, action: RouteAction) -> bool {
        match action {
            RouteAction::None => false,
            RouteAction::Pop => {
                self.pop();
                false
            }
            RouteAction::Push(route) => {
                log::debug!("Entering {}", route.name());
                self.stack.push(route);
                false
            }
            RouteAction::Quit => true,
        }
    }

    /// Go back, keeping at least one route in the stack
    pub fn pop(&mut self) -> Option<Box<dyn RouteHandler>> {
        if self.stack.len() > 1 {
            return self.stack.pop();
        }
        None
    }

    /// Get the depth of navigation
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
