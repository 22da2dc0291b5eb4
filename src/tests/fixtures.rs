//! Test fixtures
//!
//! Small but realistic subtitle files in both formats.

/// A named subtitle file and the extension it would be saved with
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    pub name: &'static str,
    pub extension: &'static str,
    pub text: &'static str,
}

pub const SRT_BASIC: &str = "1
00:00:01,000 --> 00:00:04,000
Hello world hello

2
00:00:05,000 --> 00:00:08,000
World test hello
";

pub const SRT_LESSON: &str = "1
00:00:03,400 --> 00:00:06,177
In this lesson, we're going to
be talking about finance. And

2
00:00:06,177 --> 00:00:10,009
one of the most important aspects
of finance is interest.

3
00:00:10,009 --> 00:00:13,655
When I go to a bank or some
other lending institution

4
00:00:13,655 --> 00:00:17,720
to borrow money, the bank is happy
to give me that money. But then I'm

5
00:00:17,900 --> 00:00:21,480
<i>going to be paying the bank for the
privilege of using their money.</i> And that
";

/// Contains blocks that must be skipped without failing the file
pub const SRT_MESSY: &str = "\u{feff}1\r
00:00:01,000 --> 00:00:02,000\r
{\\an8}<b>Top</b> caption\r
\r
2\r
00:00:02,500 00:00:03,000\r
no arrow\r
\r
00:00:04,000 --> 00:00:05,000 X1:10 X2:20 Y1:5 Y2:8\r
no index line\r
\r
4\r
00:00:06,000 --> 00:00:06,001\r
far too many words for one millisecond\r
";

pub const ASS_EPISODE: &str = "[Script Info]
Title: Episode 1
ScriptType: v4.00+
PlayResX: 1920

[V4+ Styles]
Format: Name, Fontname, Fontsize, PrimaryColour
Style: Default,Arial,48,&H00FFFFFF

[Events]
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
Dialogue: 0,0:00:01.00,0:00:03.50,Default,,0,0,0,,{\\i1}Previously,{\\i0} on the show...
Comment: 0,0:00:02.00,0:00:03.00,Default,,0,0,0,,translator note
Dialogue: 0,0:00:04.00,0:00:06.00,Default,Anna,0,0,0,,Well, well, well.\\NLook who's back.
Dialogue: 0,0:00:06.50,0:00:09.25,Default,Ben,0,0,0,,I never left, Anna. I was {\\b1}right here{\\b0}.
Dialogue: 0,0:00:10.00
Dialogue: 1,0:01:00.00,1:02:03.45,Sign,,0,0,0,,THE END
";

/// Every fixture that parses successfully
pub fn all() -> Vec<Fixture> {
    vec![
        Fixture {
            name: "srt_basic",
            extension: "srt",
            text: SRT_BASIC,
        },
        Fixture {
            name: "srt_lesson",
            extension: "srt",
            text: SRT_LESSON,
        },
        Fixture {
            name: "srt_messy",
            extension: "srt",
            text: SRT_MESSY,
        },
        Fixture {
            name: "ass_episode",
            extension: "ass",
            text: ASS_EPISODE,
        },
        Fixture {
            name: "ssa_episode",
            extension: "ssa",
            text: ASS_EPISODE,
        },
    ]
}
