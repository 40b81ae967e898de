//! Portfolio project model and the fixed project list.

use serde::Serialize;

/// A portfolio entry. Projects are compiled in and never change at runtime.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub icon: &'static str,
    pub link: &'static str,
}

pub static PROJECTS: [Project; 6] = [
    Project {
        id: 1,
        title: "E-Commerce Platform",
        description: "A full-stack e-commerce solution with payment integration, user authentication, and admin dashboard.",
        tags: &["React", "Node.js", "MongoDB"],
        icon: "🛒",
        link: "#",
    },
    Project {
        id: 2,
        title: "Task Management App",
        description: "A collaborative task management application with real-time updates and team collaboration features.",
        tags: &["Vue.js", "Firebase", "TypeScript"],
        icon: "✅",
        link: "#",
    },
    Project {
        id: 3,
        title: "Weather Dashboard",
        description: "An interactive weather dashboard with forecasts, maps, and weather alerts using API integration.",
        tags: &["JavaScript", "API", "CSS"],
        icon: "🌤️",
        link: "#",
    },
    Project {
        id: 4,
        title: "Social Media Analytics",
        description: "Analytics dashboard for social media metrics with data visualization and reporting tools.",
        tags: &["Python", "Django", "Chart.js"],
        icon: "📊",
        link: "#",
    },
    Project {
        id: 5,
        title: "Portfolio Website",
        description: "A responsive portfolio website with modern design and smooth animations.",
        tags: &["HTML", "CSS", "JavaScript"],
        icon: "💼",
        link: "#",
    },
    Project {
        id: 6,
        title: "Recipe Finder App",
        description: "Find recipes based on ingredients with step-by-step instructions and nutritional information.",
        tags: &["React Native", "API", "Redux"],
        icon: "🍳",
        link: "#",
    },
];
