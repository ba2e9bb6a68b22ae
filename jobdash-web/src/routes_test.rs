//! Tests for the routing system
//!
//! Validates route definitions, navigation labels and the role-dependent
//! header navigation for the dashboard's routing infrastructure.

#[cfg(test)]
mod tests {
    use crate::routes::MainRoute;

    /// Tests route enum variants
    #[test]
    fn test_route_variants() {
        let dashboard = MainRoute::Dashboard;
        let login = MainRoute::Login;
        let post_job = MainRoute::PostJob;
        let not_found = MainRoute::NotFound;

        // Test Debug trait
        assert!(format!("{dashboard:?}").contains("Dashboard"));
        assert!(format!("{login:?}").contains("Login"));
        assert!(format!("{post_job:?}").contains("PostJob"));
        assert!(format!("{not_found:?}").contains("NotFound"));
    }

    /// Tests route equality
    #[test]
    fn test_route_equality() {
        assert_eq!(MainRoute::Dashboard, MainRoute::Dashboard);
        assert_ne!(MainRoute::Dashboard, MainRoute::Login);
    }

    /// Tests route cloning
    #[test]
    fn test_route_cloning() {
        let original = MainRoute::PostJob;
        let cloned = original.clone();
        assert_eq!(original, cloned);
    }

    /// Tests navigation titles
    #[test]
    fn test_route_titles() {
        assert_eq!(MainRoute::Dashboard.title(), "Dashboard");
        assert_eq!(MainRoute::PostJob.title(), "Post a job");
        assert_eq!(MainRoute::Login.title(), "Sign in");
    }

    /// Tests role-dependent header navigation
    #[test]
    fn test_header_routes_by_role() {
        let admin_routes = MainRoute::header_routes(true);
        assert_eq!(admin_routes, vec![MainRoute::Dashboard, MainRoute::PostJob]);

        let worker_routes = MainRoute::header_routes(false);
        assert_eq!(worker_routes, vec![MainRoute::Dashboard]);

        // Login and the error route never appear in the header.
        assert!(!admin_routes.contains(&MainRoute::Login));
        assert!(!admin_routes.contains(&MainRoute::NotFound));
    }
}
