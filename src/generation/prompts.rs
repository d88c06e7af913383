use crate::domain::VideoData;

/// First-pass prompt: clean the raw transcript into organized prose while
/// keeping the speaker's voice and most of the original wording.
pub fn rewrite_prompt(video: &VideoData, transcript: &str) -> String {
    format!(
        "You are a professional content writer. Rewrite and condense the following \
YouTube video transcript into clean, well-organized content.

**Video Information:**
- Title: {title}
- Author: {author}
- Duration: {minutes} minutes

**Raw Transcript:**
{transcript}

---

## YOUR TASK

Rewrite this transcript into clean, readable content that:
1. Removes filler words, repetitions, and verbal tics (um, uh, like, you know)
2. Fixes grammar and sentence structure
3. Organizes content into logical sections with clear themes
4. Preserves the original speaker's voice and key messages
5. Maintains 80-90% of the original wording where possible
6. Uses first-person perspective (I, my, me)

## OUTPUT REQUIREMENTS

- Output clean, flowing prose organized by topic
- Include section headers to organize major topics
- Keep the full depth of content - don't over-summarize
- Target length: 2,000-8,000 words depending on video length
- Do NOT add any new information not in the transcript
- Do NOT use HTML tags - output plain text with markdown headers (##)

## EXAMPLE OUTPUT FORMAT

## Introduction
The cleaned up content for the intro section...

## Topic 1: [Name]
The cleaned up content for this topic...

## Conclusion
Wrapping up the main points...

---

Now rewrite the transcript above:",
        title = video.title,
        author = video.author,
        minutes = video.duration.minutes(),
        transcript = transcript,
    )
}

/// Second-pass prompt: reshape the cleaned prose into an email newsletter.
pub fn newsletter_prompt(video: &VideoData, rewritten: &str) -> String {
    format!(
        "Generate an engaging email newsletter based on this YouTube video content:

**Video Information:**
- Title: {title}
- Author: {author}
- Duration: {minutes} minutes

**Content (cleaned transcript):**
{rewritten}

---

## NEWSLETTER GENERATION RULES

**TARGET LENGTH:** 600-1,000 words (optimal for email newsletters)

**CONTENT RULES:**
- Write in first person (I, my, me) as if the video creator is sharing insights
- Use 90-95% of key ideas/phrases from the content
- Personal, conversational tone that feels like a friend sharing knowledge
- Make it scannable with clear sections
- Include actionable takeaways

**STRUCTURE:**

1. **Subject Line Suggestion** - Compelling, curiosity-driven (under 50 chars)
2. **Opening Hook** (2-3 sentences) - Personal story or striking statement
3. **Key Insights** - The core value, organized under ## subheadings
4. **Key Takeaways** - 3-5 bullet points of actionable advice
5. **Sign Off** - Warm, personal closing

**FORMATTING RULES:**
- Use markdown headers (##) for sections, nothing deeper
- Leave a blank line before and after every header
- Leave a blank line between list items and surrounding paragraphs
- Use **bold** for emphasis sparingly
- Use bullet points with the - character
- Keep paragraphs short (2-3 sentences max)
- No HTML tags, no markdown code blocks

---

Now generate the newsletter:",
        title = video.title,
        author = video.author,
        minutes = video.duration.minutes(),
        rewritten = rewritten,
    )
}

#[cfg(test)]
mod tests {
    use super::{newsletter_prompt, rewrite_prompt};
    use crate::domain::{Caption, VideoData, VideoDuration, VideoId};

    fn video_data() -> VideoData {
        VideoData {
            video_id: VideoId::parse("https://youtu.be/abc123").unwrap(),
            title: "T".into(),
            description: "ignored by prompts".into(),
            author: "A".into(),
            duration: VideoDuration::parse("PT12M").unwrap(),
            captions: vec![Caption::from_text("hello world transcript".into())],
        }
    }

    #[test]
    fn the_rewrite_prompt_embeds_title_author_minutes_and_transcript() {
        // given
        let video = video_data();
        let transcript = video.full_transcript();

        // when
        let prompt = rewrite_prompt(&video, &transcript);

        // then
        assert!(prompt.contains("Title: T"));
        assert!(prompt.contains("Author: A"));
        assert!(prompt.contains("Duration: 12 minutes"));
        assert!(prompt.contains("hello world transcript"));
    }

    #[test]
    fn the_newsletter_prompt_embeds_the_rewritten_content() {
        // given
        let video = video_data();
        let rewritten = "## Introduction\nCleaned up prose.";

        // when
        let prompt = newsletter_prompt(&video, rewritten);

        // then
        assert!(prompt.contains("Title: T"));
        assert!(prompt.contains("Author: A"));
        assert!(prompt.contains("Duration: 12 minutes"));
        assert!(prompt.contains(rewritten));
        assert!(prompt.contains("600-1,000 words"));
    }

    #[test]
    fn prompts_are_deterministic() {
        // given
        let video = video_data();
        let transcript = video.full_transcript();

        // when / then
        assert_eq!(
            rewrite_prompt(&video, &transcript),
            rewrite_prompt(&video, &transcript)
        );
        assert_eq!(
            newsletter_prompt(&video, "same input"),
            newsletter_prompt(&video, "same input")
        );
    }
}
