//! The built-in story-writing crew.
//!
//! Four personas and four task templates, executed in order:
//! plot, characters, scenes, editing. This is static configuration data;
//! the [`crate::manifest`] module loads custom crews from TOML instead.

use crate::{Crew, RoleSpec, TaskSpec};

const PLOT_TEMPLATE: &str = r#"Create a comprehensive plot structure for the following story concept:
"{story_prompt}"

Your plot should include:
1. A clear three-act structure (Setup, Confrontation, Resolution)
2. Key plot points including inciting incident, midpoint, climax, and resolution
3. Thematic elements and central conflict
4. Story length and pacing considerations
5. Target word count (aim for 1000-2000 words for a short story)

Format your response as a structured plot outline with:
- Story premise and theme
- Act-by-act breakdown
- Key scenes and plot points
- Character needs (what characters are required)"#;

const CHARACTER_TEMPLATE: &str = r#"Based on the plot structure created by the Plot Architect, develop the main characters for this story.

For each main character, create:
1. Name, age, and basic physical description
2. Core personality traits and motivations
3. Internal and external conflicts
4. Character arc (how they change throughout the story)
5. Relationships with other characters
6. Dialogue style and voice

Focus on creating 2-3 main characters maximum for a short story.
Ensure characters serve the plot and thematic elements."#;

const SCENE_TEMPLATE: &str = r#"Using the plot structure and character profiles, write the complete short story.

Your story should:
1. Follow the three-act structure outlined in the plot
2. Feature the developed characters with their unique voices
3. Include vivid descriptions and engaging dialogue
4. Maintain consistent pacing and tension
5. Be approximately 1000-2000 words
6. Have a clear beginning, middle, and end
7. Resolve the central conflict satisfactorily

Write the complete story in a single, polished draft."#;

const EDITING_TEMPLATE: &str = r#"Review and edit the completed story for:

1. Narrative coherence and flow
2. Character consistency and voice
3. Plot pacing and structure
4. Dialogue quality and authenticity
5. Description vividness and clarity
6. Thematic consistency
7. Grammar, punctuation, and style
8. Overall impact and emotional resonance

Provide both:
- A revised version of the story
- A brief editorial report highlighting changes made and why

Ensure the final story is polished and ready for publication."#;

/// The four personas of the built-in crew, in task order.
fn builtin_roles() -> Vec<RoleSpec> {
    vec![
        RoleSpec::builder()
            .name("Plot Architect")
            .goal(
                "Design compelling story structures with clear narrative arcs, \
                 plot points, and thematic elements",
            )
            .backstory(
                "You are a master storyteller with decades of experience in crafting \
                 compelling narratives. You specialize in creating intricate plot \
                 structures that engage readers from beginning to end. Your expertise \
                 lies in developing three-act structures, character-driven plots, and \
                 thematic coherence. You understand how to balance pacing, tension, \
                 and resolution to create emotionally satisfying stories.",
            )
            .build()
            .expect("Built-in role definition is valid"),
        RoleSpec::builder()
            .name("Character Crafter")
            .goal(
                "Develop rich, multi-dimensional characters with clear motivations, \
                 flaws, and growth arcs",
            )
            .backstory(
                "You are a character development specialist with a deep understanding \
                 of human psychology and storytelling. You excel at creating characters \
                 that feel real and relatable, with complex inner lives and believable \
                 motivations. Your characters drive the plot forward through their \
                 desires, fears, and relationships. You understand how character arcs \
                 intersect with plot development to create emotionally resonant \
                 narratives.",
            )
            .build()
            .expect("Built-in role definition is valid"),
        RoleSpec::builder()
            .name("Scene Weaver")
            .goal(
                "Write engaging, vivid scenes that bring the plot and characters to \
                 life through dialogue, action, and description",
            )
            .backstory(
                "You are a master of scene writing with exceptional skill in crafting \
                 immersive, engaging prose. You excel at balancing dialogue, action, \
                 and description to create scenes that advance the plot while \
                 developing characters. Your writing is vivid and emotionally \
                 compelling, drawing readers into the world of the story. You \
                 understand pacing, tension, and the importance of showing rather \
                 than telling.",
            )
            .build()
            .expect("Built-in role definition is valid"),
        RoleSpec::builder()
            .name("Narrative Editor")
            .goal(
                "Review and refine the story for coherence, pacing, flow, and overall \
                 narrative quality",
            )
            .backstory(
                "You are an experienced editor with a keen eye for story structure, \
                 pacing, and narrative flow. You excel at identifying inconsistencies, \
                 plot holes, and areas where the story can be strengthened. Your \
                 expertise lies in ensuring thematic coherence, character consistency, \
                 and smooth transitions between scenes. You polish prose while \
                 maintaining the author's voice and vision.",
            )
            .build()
            .expect("Built-in role definition is valid"),
    ]
}

/// The four tasks of the built-in crew, in execution order.
fn builtin_tasks() -> Vec<TaskSpec> {
    vec![
        TaskSpec::builder()
            .name("plot")
            .template(PLOT_TEMPLATE)
            .expected_output(
                "A detailed plot structure with three-act breakdown, key plot points, \
                 themes, and character requirements",
            )
            .output_file("plot_structure.txt")
            .build()
            .expect("Built-in task definition is valid"),
        TaskSpec::builder()
            .name("characters")
            .template(CHARACTER_TEMPLATE)
            .expected_output(
                "Detailed character profiles for all main characters including \
                 backgrounds, motivations, conflicts, and arcs",
            )
            .depends_on(vec!["plot".to_string()])
            .output_file("character_profiles.txt")
            .build()
            .expect("Built-in task definition is valid"),
        TaskSpec::builder()
            .name("scenes")
            .template(SCENE_TEMPLATE)
            .expected_output(
                "A complete short story (1000-2000 words) following the plot \
                 structure and featuring the developed characters",
            )
            .depends_on(vec!["plot".to_string(), "characters".to_string()])
            .output_file("story_draft.txt")
            .build()
            .expect("Built-in task definition is valid"),
        TaskSpec::builder()
            .name("editing")
            .template(EDITING_TEMPLATE)
            .expected_output(
                "A polished final story and editorial report detailing improvements \
                 made",
            )
            .depends_on(vec![
                "plot".to_string(),
                "characters".to_string(),
                "scenes".to_string(),
            ])
            .output_file("final_story.txt")
            .build()
            .expect("Built-in task definition is valid"),
    ]
}

/// The built-in story-writing crew: plot, characters, scenes, editing.
pub fn story_crew() -> Crew {
    Crew::new(
        "story_writing",
        "Collaborative short-story pipeline: plot, characters, scenes, editing",
        builtin_roles(),
        builtin_tasks(),
    )
    .expect("Built-in crew definition is valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CREW_SIZE;

    #[test]
    fn builtin_crew_validates() {
        let crew = story_crew();
        assert_eq!(crew.roles().len(), CREW_SIZE);
        assert_eq!(crew.tasks().len(), CREW_SIZE);
    }

    #[test]
    fn builtin_crew_runs_plot_first() {
        let crew = story_crew();
        let (first_task, first_role) = crew.assignments().next().unwrap();
        assert_eq!(first_task.name(), "plot");
        assert_eq!(first_role.name(), "Plot Architect");
        assert!(first_task.depends_on().is_empty());
    }

    #[test]
    fn builtin_dependencies_form_a_chain() {
        let crew = story_crew();
        for (position, task) in crew.tasks().iter().enumerate() {
            // Every earlier task feeds every later one.
            assert_eq!(task.depends_on().len(), position);
        }
    }

    #[test]
    fn builtin_output_files_are_distinct() {
        let crew = story_crew();
        let mut files: Vec<&String> = crew.tasks().iter().map(|t| t.output_file()).collect();
        files.sort();
        files.dedup();
        assert_eq!(files.len(), CREW_SIZE);
    }
}
