// Fixed prompt fragments for the user-context block.
// The framework block itself lives in the resource root, not here.

/// Heading for the echoed request fields.
pub const CONTEXT_HEADING: &str = "## Context for Goal Generation";

/// Lead-in line for the user's requested focus theme.
pub const FOCUS_LEAD_IN: &str = "The user wants to emphasize the following areas or themes:";

/// Lead-in line for the org document section matching the requested theme.
pub const FOCUS_SECTION_LEAD_IN: &str =
    "The organization describes this focus area as follows:";

/// Closing task directive appended to every user context.
pub const TASK_DIRECTIVE: &str = "\
### Your Task
Generate quarterly career goals that:
1. Demonstrate progress toward the cultural principles above.
2. Meet the job level expectations.
3. Include a rationale connecting each goal to the cultural principles and level expectations.
4. Follow the goal style (independent or progressive).
5. Respect the growth intensity band.
6. Maintain locus of control (goals should not depend on external company decisions).

Generate the goals now.";
